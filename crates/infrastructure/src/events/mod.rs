//! In-process domain event delivery

mod in_process_bus;
mod welcome_notification;

pub use in_process_bus::{EventListener, InProcessEventBus};
pub use welcome_notification::{WelcomeNotification, WelcomeNotificationListener};
