/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Modifier key state sampled at the moment of an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Shift held.
    pub shift: bool,
    /// Control held.
    pub ctrl: bool,
    /// Alt / Option held.
    pub alt: bool,
    /// Meta / Command held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
}

/// One press of a UI control (e.g. a bookmark button).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    /// Button that triggered the activation.
    pub button: MouseButton,
    /// Modifier state at the time of the press.
    pub modifiers: Modifiers,
}

impl Activation {
    /// Plain primary-button press.
    #[must_use]
    pub const fn primary() -> Self {
        Self {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }
    }

    /// Primary-button press with the given modifiers.
    #[must_use]
    pub const fn primary_with(modifiers: Modifiers) -> Self {
        Self {
            button: MouseButton::Left,
            modifiers,
        }
    }
}
