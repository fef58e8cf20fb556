use core::fmt;
use spin::Mutex;

/// Kernel initialization status tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    NotStarted,
    InProgress,
    Completed,
    Failed(&'static str),
}

/// Kernel component status
#[derive(Debug, Clone, Copy)]
pub struct ComponentStatus {
    pub name: &'static str,
    pub status: InitStatus,
}

impl ComponentStatus {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            status: InitStatus::NotStarted,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, InitStatus::Completed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, InitStatus::Failed(_))
    }
}

const MAX_COMPONENTS: usize = 12;

/// Fixed-capacity registry; there is no heap.
pub struct ComponentTable {
    entries: [Option<ComponentStatus>; MAX_COMPONENTS],
}

impl ComponentTable {
    pub const fn new() -> Self {
        Self {
            entries: [None; MAX_COMPONENTS],
        }
    }

    pub fn register(&mut self, name: &'static str) -> Result<(), &'static str> {
        if self.find(name).is_some() {
            return Ok(());
        }
        let slot = self
            .entries
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or("component table full")?;
        *slot = Some(ComponentStatus::new(name));
        Ok(())
    }

    pub fn update(&mut self, name: &'static str, status: InitStatus) {
        if let Some(component) = self.entries.iter_mut().flatten().find(|c| c.name == name) {
            component.status = status;
        }
    }

    pub fn find(&self, name: &str) -> Option<&ComponentStatus> {
        self.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentStatus> {
        self.entries.iter().flatten()
    }

    pub fn all_ready(&self) -> bool {
        let mut components = self.iter().peekable();
        components.peek().is_some() && components.all(|c| c.is_complete())
    }
}

impl Default for ComponentTable {
    fn default() -> Self {
        Self::new()
    }
}

static INIT_STATUS: Mutex<ComponentTable> = Mutex::new(ComponentTable::new());

/// Track kernel component initialization
pub fn register_component(name: &'static str) -> Result<(), &'static str> {
    INIT_STATUS.lock().register(name)
}

/// Update component status
pub fn update_component_status(name: &'static str, status: InitStatus) {
    INIT_STATUS.lock().update(name, status);
}

pub fn component_status(name: &str) -> Option<InitStatus> {
    INIT_STATUS.lock().find(name).map(|c| c.status)
}

/// Check if all components are initialized
pub fn all_components_ready() -> bool {
    INIT_STATUS.lock().all_ready()
}

impl fmt::Display for InitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitStatus::NotStarted => write!(f, "Not Started"),
            InitStatus::InProgress => write!(f, "In Progress"),
            InitStatus::Completed => write!(f, "Completed"),
            InitStatus::Failed(err) => write!(f, "Failed: {}", err),
        }
    }
}
