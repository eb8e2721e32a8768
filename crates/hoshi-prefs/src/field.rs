//! Preference field declarations.

use std::{fmt, ops::RangeInclusive, rc::Rc};

use crate::{
    edit::{EditError, EditInput, parse_positive},
    editor::{EditorRequest, TextTarget},
    layout::{Control, Row},
};

/// Stable identifier of a field within its screen.
///
/// Every screen declares an enum of its fields. The enum is also the context
/// token that routes an editor response back to the field being edited.
pub trait FieldKey: Copy + Eq + fmt::Debug {
    /// Returns the stable identifier of the field.
    fn id(self) -> &'static str;
}

/// Reads a property from the backing model.
pub type Getter<M, T> = fn(&M) -> T;
/// Writes a property of the backing model.
pub type Setter<M, T> = fn(&mut M, T);
/// A condition evaluated against the backing model at render time.
pub type Predicate<M> = fn(&M) -> bool;

type Read<M, T> = Box<dyn Fn(&M) -> T>;
type Write<M, T> = Box<dyn Fn(&mut M, T)>;

/// A named value in a bucketed picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Raw value stored in the model when the bucket is picked.
    pub value: u32,
    /// Label shown for the bucket.
    pub label: &'static str,
}

impl Bucket {
    /// Creates a bucket.
    #[must_use]
    pub const fn new(value: u32, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Bounds, step and scale of a slider control.
///
/// The slider works in control units; the model stores `position / scale`.
/// Positions snap to the nearest step from `min`, both when written and when
/// read back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    /// Lowest control position.
    pub min: f64,
    /// Highest control position.
    pub max: f64,
    /// Distance between two adjacent positions. Zero means continuous.
    pub step: f64,
    /// Control units per stored unit.
    pub scale: f64,
}

impl SliderRange {
    /// A 0-100 % slider in whole percent, stored as a fraction in 0.0-1.0.
    pub const PERCENT: Self = Self {
        min: 0.0,
        max: 100.0,
        step: 1.0,
        scale: 100.0,
    };

    /// Creates an unscaled slider range.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            scale: 1.0,
        }
    }

    /// Sets the number of control units per stored unit.
    #[must_use]
    pub const fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    fn snap(self, position: f64) -> f64 {
        if self.step > 0.0 {
            ((position - self.min) / self.step).round() * self.step + self.min
        } else {
            position
        }
    }

    fn to_position(self, stored: f64) -> f64 {
        self.snap(stored * self.scale)
    }

    fn to_stored(self, position: f64) -> f64 {
        self.snap(position) / self.scale
    }
}

/// How much of the screen has to be redrawn after a write to a field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RefreshScope {
    /// Only the edited row.
    #[default]
    Row,
    /// Every row of the group containing the field.
    Group,
    /// The whole screen.
    Screen,
}

/// The kind of value a field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum ValueKind {
    /// On/off switch.
    #[display("boolean")]
    Boolean,
    /// Integer in a closed range.
    #[display("integer")]
    Integer,
    /// Float in a closed range.
    #[display("float")]
    Float,
    /// One entry of a fixed list, including bucketed values.
    #[display("choice")]
    Choice,
    /// Positive integer entered as text.
    #[display("number")]
    Number,
    /// Ordered list of positive integers entered as text.
    #[display("number list")]
    NumberList,
}

enum FieldKind<M> {
    Toggle {
        get: Getter<M, bool>,
        set: Setter<M, bool>,
    },
    Stepper {
        read: Read<M, i64>,
        write: Write<M, i64>,
        min: i64,
        max: i64,
    },
    Slider {
        get: Getter<M, f64>,
        set: Setter<M, f64>,
        range: SliderRange,
    },
    Picker {
        labels: Vec<String>,
        selected: Read<M, Option<usize>>,
        select: Write<M, usize>,
    },
    Number {
        get: Getter<M, u32>,
        set: Setter<M, u32>,
    },
    NumberList {
        get: Getter<M, Vec<u32>>,
        set: Setter<M, Vec<u32>>,
    },
}

impl<M> FieldKind<M> {
    fn value_kind(&self) -> ValueKind {
        match self {
            Self::Toggle { .. } => ValueKind::Boolean,
            Self::Stepper { .. } => ValueKind::Integer,
            Self::Slider { .. } => ValueKind::Float,
            Self::Picker { .. } => ValueKind::Choice,
            Self::Number { .. } => ValueKind::Number,
            Self::NumberList { .. } => ValueKind::NumberList,
        }
    }
}

/// One editable setting bound to a property of the backing model `M`.
///
/// Fields are declared with one of the kind constructors and refined with the
/// builder methods:
///
/// ```
/// use hoshi_prefs::{Bucket, FieldKey, PrefField};
///
/// struct Profile {
///     auto_select: bool,
///     min_games: u32,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum ProfileField {
///     MinGames,
/// }
///
/// impl FieldKey for ProfileField {
///     fn id(self) -> &'static str {
///         "min_games"
///     }
/// }
///
/// const BUCKETS: [Bucket; 2] = [Bucket::new(0, "None"), Bucket::new(450, "Some")];
///
/// let field = PrefField::<Profile, ProfileField>::buckets(
///     ProfileField::MinGames,
///     "Minimum games",
///     &BUCKETS,
///     |m| m.min_games,
///     |m, games| m.min_games = games,
/// )
/// .enabled_when(|m| !m.auto_select);
/// assert_eq!(field.label(), "Minimum games");
/// ```
pub struct PrefField<M, F> {
    key: F,
    label: &'static str,
    kind: FieldKind<M>,
    copy: Box<dyn Fn(&M, &mut M)>,
    enabled_when: Option<Predicate<M>>,
    visible_when: Option<Predicate<M>>,
    refresh: RefreshScope,
    side_effect: Option<Box<dyn Fn()>>,
}

impl<M, F> fmt::Debug for PrefField<M, F>
where
    F: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefField")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind.value_kind())
            .field("refresh", &self.refresh)
            .finish_non_exhaustive()
    }
}

impl<M, F> PrefField<M, F>
where
    M: 'static,
    F: FieldKey,
{
    fn with_kind(
        key: F,
        label: &'static str,
        kind: FieldKind<M>,
        copy: Box<dyn Fn(&M, &mut M)>,
    ) -> Self {
        Self {
            key,
            label,
            kind,
            copy,
            enabled_when: None,
            visible_when: None,
            refresh: RefreshScope::Row,
            side_effect: None,
        }
    }

    /// Declares an on/off switch.
    #[must_use]
    pub fn toggle(
        key: F,
        label: &'static str,
        get: Getter<M, bool>,
        set: Setter<M, bool>,
    ) -> Self {
        Self::with_kind(
            key,
            label,
            FieldKind::Toggle { get, set },
            Box::new(move |from: &M, to: &mut M| set(to, get(from))),
        )
    }

    /// Declares an integer stepper bounded to `range`.
    #[must_use]
    pub fn stepper<T>(
        key: F,
        label: &'static str,
        range: RangeInclusive<T>,
        get: Getter<M, T>,
        set: Setter<M, T>,
    ) -> Self
    where
        T: Copy + Into<i64> + TryFrom<i64> + 'static,
    {
        let kind = FieldKind::Stepper {
            read: Box::new(move |model: &M| -> i64 { get(model).into() }),
            write: Box::new(move |model: &mut M, value: i64| {
                // The value was checked against the range, which came from `T`.
                if let Ok(value) = T::try_from(value) {
                    set(model, value);
                }
            }),
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        };
        Self::with_kind(
            key,
            label,
            kind,
            Box::new(move |from: &M, to: &mut M| set(to, get(from))),
        )
    }

    /// Declares a float slider.
    #[must_use]
    pub fn slider(
        key: F,
        label: &'static str,
        range: SliderRange,
        get: Getter<M, f64>,
        set: Setter<M, f64>,
    ) -> Self {
        Self::with_kind(
            key,
            label,
            FieldKind::Slider { get, set, range },
            Box::new(move |from: &M, to: &mut M| set(to, get(from))),
        )
    }

    /// Declares a picker over a fixed, ordered list of `(value, label)` options.
    ///
    /// The selected index is the position of the model's current value in the
    /// list, or none when the value is not listed.
    #[must_use]
    pub fn choice<T, S>(
        key: F,
        label: &'static str,
        options: impl IntoIterator<Item = (T, S)>,
        get: Getter<M, T>,
        set: Setter<M, T>,
    ) -> Self
    where
        T: PartialEq + Clone + 'static,
        S: Into<String>,
    {
        let (values, labels): (Vec<T>, Vec<String>) = options
            .into_iter()
            .map(|(value, text)| (value, text.into()))
            .unzip();
        let values: Rc<[T]> = values.into();

        let selected = {
            let values = Rc::clone(&values);
            Box::new(move |model: &M| {
                let current = get(model);
                values.iter().position(|value| *value == current)
            })
        };
        let select = Box::new(move |model: &mut M, index: usize| {
            if let Some(value) = values.get(index) {
                set(model, value.clone());
            }
        });

        Self::with_kind(
            key,
            label,
            FieldKind::Picker {
                labels,
                selected,
                select,
            },
            Box::new(move |from: &M, to: &mut M| set(to, get(from))),
        )
    }

    /// Declares a picker presenting a raw number as a short list of named buckets.
    #[must_use]
    pub fn buckets(
        key: F,
        label: &'static str,
        buckets: &'static [Bucket],
        get: Getter<M, u32>,
        set: Setter<M, u32>,
    ) -> Self {
        Self::choice(
            key,
            label,
            buckets.iter().map(|bucket| (bucket.value, bucket.label)),
            get,
            set,
        )
    }

    /// Declares a positive integer entered as free-form text.
    #[must_use]
    pub fn positive_number(
        key: F,
        label: &'static str,
        get: Getter<M, u32>,
        set: Setter<M, u32>,
    ) -> Self {
        Self::with_kind(
            key,
            label,
            FieldKind::Number { get, set },
            Box::new(move |from: &M, to: &mut M| set(to, get(from))),
        )
    }

    /// Declares an ordered list of distinct positive integers.
    #[must_use]
    pub fn number_list(
        key: F,
        label: &'static str,
        get: Getter<M, Vec<u32>>,
        set: Setter<M, Vec<u32>>,
    ) -> Self {
        Self::with_kind(
            key,
            label,
            FieldKind::NumberList { get, set },
            Box::new(move |from: &M, to: &mut M| set(to, get(from))),
        )
    }

    /// Makes the row read-only whenever `predicate` is false.
    #[must_use]
    pub fn enabled_when(mut self, predicate: Predicate<M>) -> Self {
        self.enabled_when = Some(predicate);
        self
    }

    /// Hides the row whenever `predicate` is false.
    #[must_use]
    pub fn visible_when(mut self, predicate: Predicate<M>) -> Self {
        self.visible_when = Some(predicate);
        self
    }

    /// Sets how much of the screen a write to this field invalidates.
    ///
    /// Fields that other rows depend on use [`RefreshScope::Group`] or
    /// [`RefreshScope::Screen`].
    #[must_use]
    pub fn refreshes(mut self, scope: RefreshScope) -> Self {
        self.refresh = scope;
        self
    }

    /// Runs `effect` after every successful write to this field.
    ///
    /// The effect is fire-and-forget; its result is never observed.
    #[must_use]
    pub fn on_change(mut self, effect: impl Fn() + 'static) -> Self {
        self.side_effect = Some(Box::new(effect));
        self
    }
}

impl<M, F> PrefField<M, F>
where
    F: FieldKey,
{
    /// Returns the field identifier.
    #[must_use]
    pub fn key(&self) -> F {
        self.key
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the kind of value the field edits.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        self.kind.value_kind()
    }

    /// Returns the refresh scope of a write to this field.
    #[must_use]
    pub fn refresh_scope(&self) -> RefreshScope {
        self.refresh
    }

    /// Returns `true` if the row accepts edits in the current model state.
    #[must_use]
    pub fn is_enabled(&self, model: &M) -> bool {
        self.enabled_when.is_none_or(|predicate| predicate(model))
    }

    /// Returns `true` if the row is shown in the current model state.
    #[must_use]
    pub fn is_visible(&self, model: &M) -> bool {
        self.visible_when.is_none_or(|predicate| predicate(model))
    }

    pub(crate) fn row(&self, model: &M) -> Row<F> {
        let control = match &self.kind {
            FieldKind::Toggle { get, .. } => Control::Switch { on: get(model) },
            FieldKind::Stepper { read, min, max, .. } => Control::Stepper {
                value: read(model),
                min: *min,
                max: *max,
            },
            FieldKind::Slider { get, range, .. } => Control::Slider {
                value: range.to_position(get(model)),
                min: range.min,
                max: range.max,
                step: range.step,
                scale: range.scale,
            },
            FieldKind::Picker {
                labels, selected, ..
            } => Control::Picker {
                labels: labels.clone(),
                selected: selected(model),
            },
            FieldKind::Number { get, .. } => Control::Text {
                value: get(model).to_string(),
            },
            FieldKind::NumberList { get, .. } => Control::NumberList {
                values: get(model),
            },
        };
        Row {
            field: self.key,
            id: self.key.id(),
            label: self.label,
            enabled: self.is_enabled(model),
            control,
        }
    }

    /// Validates `input` and writes it to the model.
    ///
    /// Returns `Ok(false)` when the input leaves the model as it was and no
    /// write happened.
    pub(crate) fn apply(&self, model: &mut M, input: EditInput) -> Result<bool, EditError> {
        match (&self.kind, input) {
            (FieldKind::Toggle { set, .. }, EditInput::Toggle(on)) => set(model, on),
            (FieldKind::Stepper { write, min, max, .. }, EditInput::Step(value)) => {
                if !(*min..=*max).contains(&value) {
                    return Err(EditError::OutOfRange {
                        value,
                        min: *min,
                        max: *max,
                    });
                }
                write(model, value);
            }
            (FieldKind::Slider { set, range, .. }, EditInput::Slide(position)) => {
                if !(range.min..=range.max).contains(&position) {
                    return Err(EditError::PositionOutOfRange {
                        position,
                        min: range.min,
                        max: range.max,
                    });
                }
                set(model, range.to_stored(position));
            }
            (
                FieldKind::Picker {
                    labels,
                    selected,
                    select,
                },
                EditInput::Pick(index),
            ) => {
                if index >= labels.len() {
                    return Err(EditError::ChoiceOutOfRange {
                        index,
                        len: labels.len(),
                    });
                }
                if selected(model) == Some(index) {
                    return Ok(false);
                }
                select(model, index);
            }
            (FieldKind::Number { set, .. }, EditInput::Text(text)) => {
                set(model, parse_positive(&text)?);
            }
            (FieldKind::NumberList { get, set }, EditInput::AddNumber(text)) => {
                let number = parse_positive(&text)?;
                let mut numbers = get(model);
                if numbers.contains(&number) {
                    return Ok(false);
                }
                numbers.push(number);
                set(model, numbers);
            }
            (FieldKind::NumberList { get, set }, EditInput::ReplaceNumber { index, text }) => {
                let mut numbers = get(model);
                let len = numbers.len();
                let Some(slot) = numbers.get_mut(index) else {
                    return Err(EditError::EntryOutOfRange { index, len });
                };
                let number = parse_positive(&text)?;
                if *slot == number {
                    return Ok(false);
                }
                *slot = number;
                let mut seen = Vec::with_capacity(len);
                numbers.retain(|n| {
                    if seen.contains(n) {
                        false
                    } else {
                        seen.push(*n);
                        true
                    }
                });
                set(model, numbers);
            }
            (FieldKind::NumberList { get, set }, EditInput::RemoveNumber(index)) => {
                let mut numbers = get(model);
                if index >= numbers.len() {
                    return Err(EditError::EntryOutOfRange {
                        index,
                        len: numbers.len(),
                    });
                }
                numbers.remove(index);
                set(model, numbers);
            }
            (kind, input) => {
                return Err(EditError::KindMismatch {
                    input: input.name(),
                    kind: kind.value_kind(),
                });
            }
        }
        Ok(true)
    }

    /// Copies this field's value from `defaults` into `model`.
    pub(crate) fn reset(&self, defaults: &M, model: &mut M) {
        (self.copy)(defaults, model);
    }

    pub(crate) fn run_side_effect(&self) {
        if let Some(effect) = &self.side_effect {
            effect();
        }
    }

    pub(crate) fn editor_request(&self, model: &M) -> Result<EditorRequest<F>, EditError> {
        match &self.kind {
            FieldKind::Picker {
                labels, selected, ..
            } => Ok(EditorRequest::Picker {
                field: self.key,
                title: self.label,
                labels: labels.clone(),
                selected: selected(model),
            }),
            FieldKind::Number { get, .. } => Ok(EditorRequest::Text {
                target: TextTarget::Value(self.key),
                title: self.label,
                text: get(model).to_string(),
            }),
            FieldKind::NumberList { .. } => Ok(EditorRequest::Text {
                target: TextTarget::NewEntry(self.key),
                title: self.label,
                text: String::new(),
            }),
            kind => Err(EditError::NoEditor {
                kind: kind.value_kind(),
            }),
        }
    }

    pub(crate) fn entry_editor_request(
        &self,
        model: &M,
        index: usize,
    ) -> Result<EditorRequest<F>, EditError> {
        let FieldKind::NumberList { get, .. } = &self.kind else {
            return Err(EditError::NoEditor {
                kind: self.kind.value_kind(),
            });
        };
        let numbers = get(model);
        let number = numbers.get(index).ok_or(EditError::EntryOutOfRange {
            index,
            len: numbers.len(),
        })?;
        Ok(EditorRequest::Text {
            target: TextTarget::Entry {
                field: self.key,
                index,
            },
            title: self.label,
            text: number.to_string(),
        })
    }
}
