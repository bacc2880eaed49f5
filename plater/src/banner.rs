/// Section banner printed before each generated artifact.
pub(crate) struct Banner {
    visible: bool,
}

impl Banner {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn show(&self, label: &str) {
        if self.visible {
            println!("── {} ──", label);
        }
    }
}
