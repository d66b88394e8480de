pub type Callback<'a> = Box<dyn FnMut() + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    RadioButton,
    Checkbox,
}

/// Controlled on/off control: renders `status` and reports presses, never changes itself.
pub struct Toggle<'a> {
    kind: ToggleKind,
    label: String,
    status: bool,
    on_press: Option<Callback<'a>>,
}

impl<'a> Toggle<'a> {
    pub fn radio_button(label: impl Into<String>, status: bool) -> Self {
        Self::new(ToggleKind::RadioButton, label, status)
    }

    pub fn checkbox(label: impl Into<String>, status: bool) -> Self {
        Self::new(ToggleKind::Checkbox, label, status)
    }

    fn new(kind: ToggleKind, label: impl Into<String>, status: bool) -> Self {
        Self {
            kind,
            label: label.into(),
            status,
            on_press: None,
        }
    }

    pub fn on_press(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    pub fn kind(&self) -> ToggleKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn status_name(&self) -> &'static str {
        if self.status { "checked" } else { "unchecked" }
    }

    pub fn press(&mut self) {
        if let Some(on_press) = self.on_press.as_mut() {
            on_press();
        }
    }
}

pub struct Modal<'a> {
    visible: bool,
    on_dismiss: Option<Callback<'a>>,
}

impl<'a> Modal<'a> {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            on_dismiss: None,
        }
    }

    pub fn on_dismiss(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_dismiss = Some(Box::new(f));
        self
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn dismiss(&mut self) {
        if let Some(on_dismiss) = self.on_dismiss.as_mut() {
            on_dismiss();
        }
    }
}
