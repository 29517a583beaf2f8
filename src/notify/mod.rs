mod mailer;
mod message;

pub use mailer::{Notifier, SmtpNotifier};
pub use message::{buy_alert, sell_alert, AlertMessage};

#[cfg(test)]
pub use mailer::MockNotifier;
