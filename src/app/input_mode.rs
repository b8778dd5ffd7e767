#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    FieldEdit,
    ConfirmDialog,
    Help,
}
