#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Action::Start => "Start",
            Action::Stop => "Stop",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Start" => Some(Action::Start),
            "Stop" => Some(Action::Stop),
            _ => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Action::Start)
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Action::Stop)
    }
}
