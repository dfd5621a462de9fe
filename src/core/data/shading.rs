/// Colorization formula baked into the fragment shader. Changing the
/// shading regenerates the kernel; the choice never exists at runtime on
/// the GPU side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum ShadingKind {
    #[default]
    Standard,
    Negative,
    Flat,
}

impl ShadingKind {
    pub const ALL: &'static [Self] = &[Self::Standard, Self::Negative, Self::Flat];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Negative => "Negative",
            Self::Flat => "Flat",
        }
    }
}

impl std::fmt::Display for ShadingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
