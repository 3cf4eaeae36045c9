/// Site menu shown on narrow screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

pub const SITE_PAGES: [&str; 4] = ["หน้าแรก", "ห้องพัก", "แกลเลอรี", "จองที่พัก"];

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
