/// One minute of a recording: the per-sex mean across all subjects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Offset from the start of the recording (row index of the source file).
    pub minute: u32,
    pub female: f64,
    pub male: f64,
}

impl Sample {
    pub fn value(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Female => self.female,
            Sex::Male => self.male,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Sex::Female => "\u{2640}",
            Sex::Male => "\u{2642}",
        }
    }

    pub fn row_title(self) -> &'static str {
        match self {
            Sex::Female => "Female (mean across mice)",
            Sex::Male => "Male (mean across mice)",
        }
    }
}

/// The two recorded channels, each shown in its own panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Measurement {
    Activity,
    Temperature,
}

impl Measurement {
    pub const ALL: [Measurement; 2] = [Measurement::Activity, Measurement::Temperature];

    /// Element id of the panel container.
    pub fn panel_id(self) -> &'static str {
        match self {
            Measurement::Activity => "activity",
            Measurement::Temperature => "temp",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Measurement::Activity => "Activity (counts)",
            Measurement::Temperature => "Temperature (\u{b0}C)",
        }
    }

    /// Activity axes start at zero; temperature axes hug the data with padding.
    pub fn zero_based(self) -> bool {
        matches!(self, Measurement::Activity)
    }
}
