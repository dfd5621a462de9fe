/// Supersampling quality. The name gives the samples per pixel; the grid
/// size is the edge length of the sub-pixel sample grid baked into the
/// fragment shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum AntiAliasing {
    #[default]
    X1,
    X4,
    X9,
    X16,
}

impl AntiAliasing {
    pub const ALL: &'static [Self] = &[Self::X1, Self::X4, Self::X9, Self::X16];

    #[must_use]
    pub const fn grid_size(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X4 => 2,
            Self::X9 => 3,
            Self::X16 => 4,
        }
    }

    #[must_use]
    pub const fn sample_count(self) -> u32 {
        self.grid_size() * self.grid_size()
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::X1 => "1x",
            Self::X4 => "4x",
            Self::X9 => "9x",
            Self::X16 => "16x",
        }
    }
}

impl std::fmt::Display for AntiAliasing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
