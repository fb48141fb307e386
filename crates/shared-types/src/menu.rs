/// Single-selection state for a sidebar menu.
///
/// Clicking an item deselects every other item in the same menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuSelection {
    active: usize,
}

impl MenuSelection {
    pub fn new(active: usize) -> Self {
        Self { active }
    }

    pub fn select(&mut self, index: usize) {
        self.active = index;
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn active(&self) -> usize {
        self.active
    }
}
