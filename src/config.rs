#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl GenerationConfig {
    pub const DEFAULT: Self = Self {
        length: 16,
        include_lowercase: true,
        include_uppercase: true,
        include_numbers: true,
        include_symbols: false,
        exclude_ambiguous: false,
    };

    pub const SIMPLE: Self = Self {
        length: 12,
        include_lowercase: true,
        include_uppercase: true,
        include_numbers: true,
        include_symbols: true,
        exclude_ambiguous: true,
    };

    pub const STRONG: Self = Self {
        length: 20,
        include_lowercase: true,
        include_uppercase: true,
        include_numbers: true,
        include_symbols: true,
        exclude_ambiguous: false,
    };

    pub const PIN: Self = Self {
        length: 6,
        include_lowercase: false,
        include_uppercase: false,
        include_numbers: true,
        include_symbols: false,
        exclude_ambiguous: false,
    };

    /// `None` fields keep the current value.
    pub fn with_overrides(self, overrides: &Overrides) -> Self {
        Self {
            length: overrides.length.unwrap_or(self.length),
            include_lowercase: overrides.lowercase.unwrap_or(self.include_lowercase),
            include_uppercase: overrides.uppercase.unwrap_or(self.include_uppercase),
            include_numbers: overrides.numbers.unwrap_or(self.include_numbers),
            include_symbols: overrides.symbols.unwrap_or(self.include_symbols),
            exclude_ambiguous: overrides.exclude_ambiguous.unwrap_or(self.exclude_ambiguous),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub length: Option<usize>,
    pub lowercase: Option<bool>,
    pub uppercase: Option<bool>,
    pub numbers: Option<bool>,
    pub symbols: Option<bool>,
    pub exclude_ambiguous: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Default,
    Simple,
    Strong,
    Pin,
}

impl Preset {
    pub const fn config(self) -> GenerationConfig {
        match self {
            Preset::Default => GenerationConfig::DEFAULT,
            Preset::Simple => GenerationConfig::SIMPLE,
            Preset::Strong => GenerationConfig::STRONG,
            Preset::Pin => GenerationConfig::PIN,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Simple => "simple",
            Preset::Strong => "strong",
            Preset::Pin => "pin",
        }
    }
}
