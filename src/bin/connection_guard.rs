// Singleton demo: a process-wide database connection guard.
//
// Rather than a private static instance behind a getter, the guard is
// process-wide state initialized on first use; every caller goes through the
// one `connection()` acquisition function and observes the same instance.

use lazy_static::lazy_static;
use std::sync::{Mutex, MutexGuard};

pub struct DatabaseConnection {
    connected: bool,
}

impl DatabaseConnection {
    const fn new() -> Self {
        Self { connected: false }
    }

    /// Connects unless a connection is already active, in which case the
    /// existing one is kept and reported.
    pub fn connect(&mut self) -> &'static str {
        if self.connected {
            "There is already an active connection"
        } else {
            self.connected = true;
            "Connected to the database"
        }
    }

    pub fn disconnect(&mut self) -> &'static str {
        self.connected = false;
        "Disconnected from the database"
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

lazy_static! {
    static ref CONNECTION: Mutex<DatabaseConnection> = Mutex::new(DatabaseConnection::new());
}

/// The single point of access to the process-wide connection.
pub fn connection() -> MutexGuard<'static, DatabaseConnection> {
    CONNECTION.lock().unwrap()
}

fn main() {
    // Two call sites, one instance: the second connect sees the first.
    println!("{}", connection().connect());
    println!("{}", connection().connect());

    println!("{}", connection().disconnect());

    // After disconnecting, connecting works again.
    println!("{}", connection().connect());
}
