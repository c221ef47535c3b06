//! The phone-dial collaborator.

/// Opens the host's phone-call interface pre-filled with a number.
///
/// Fire-and-forget: implementations must not block and have nothing to
/// report back. A host without a dialer is the host's problem.
pub trait Dialer {
    fn launch_dial(&self, phone_number: &str);
}

/// `tel:` URI for `phone_number`, as understood by every platform dialer.
pub fn tel_uri(phone_number: &str) -> String {
    let digits: String = phone_number
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '*' | '#'))
        .collect();
    format!("tel:{digits}")
}

/// Remembers every number it was asked to dial.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingDialer {
    pub dialed: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl Dialer for RecordingDialer {
    fn launch_dial(&self, phone_number: &str) {
        self.dialed.borrow_mut().push(phone_number.to_string());
    }
}
