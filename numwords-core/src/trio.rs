//! Digit-group decomposition and rendering context

/// The ones/tens/hundreds decomposition of one digit group
///
/// Derived from a group value in `[0, 999]`; recomputed per group, never
/// stored. Digit presence is always decided from the digit value itself,
/// never from positional absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trio {
    value: u16,
    hundreds: u8,
    tens: u8,
    ones: u8,
}

impl Trio {
    /// Decompose a group value into its three digits
    pub fn from_group(value: u64) -> Self {
        debug_assert!(value < 1000, "trio decomposition expects a 3-digit group");
        let value = value as u16;
        Trio {
            value,
            hundreds: (value / 100) as u8,
            tens: (value / 10 % 10) as u8,
            ones: (value % 10) as u8,
        }
    }

    /// The full group value in `[0, 999]`
    pub fn value(self) -> u16 {
        self.value
    }

    /// Hundreds digit
    pub fn hundreds(self) -> u8 {
        self.hundreds
    }

    /// Tens digit
    pub fn tens(self) -> u8 {
        self.tens
    }

    /// Ones digit
    pub fn ones(self) -> u8 {
        self.ones
    }

    /// True when the group contributes no words at all
    pub fn is_zero(self) -> bool {
        self.value == 0
    }

    /// True when the group is a bare ones digit (no tens, no hundreds)
    pub fn under_ten(self) -> bool {
        self.value < 10
    }

    /// True when the tens digit selects the teens table
    pub fn is_teens(self) -> bool {
        self.tens == 1
    }
}

/// Position of a digit group while rendering a full number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupContext {
    /// Group index; 0 is the least-significant group
    pub index: usize,
    /// Total number of groups in the token sequence
    pub count: usize,
    /// Whether any less-significant group already rendered words
    pub lower_rendered: bool,
}

impl GroupContext {
    /// True for the most-significant group
    pub fn is_top(self) -> bool {
        self.index + 1 == self.count
    }
}
