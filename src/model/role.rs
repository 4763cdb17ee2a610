use serde::Serialize;
use std::fmt::Display;

/// The four actors of the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Customer,
    Waiter,
    Cook,
    Chef,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Customer, Role::Waiter, Role::Cook, Role::Chef];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Waiter => "waiter",
            Role::Cook => "cook",
            Role::Chef => "chef",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
