/// Top-level screen, switched with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    General,
    Hooks,
}

impl Mode {
    pub fn title(self) -> &'static str {
        match self {
            Self::General => "General Settings",
            Self::Hooks => "Service Hooks",
        }
    }
}
