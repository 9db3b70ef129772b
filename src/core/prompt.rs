//! # Persona Prompt & Hospital Constants
//!
//! The fixed persona template and the hospital's published contact details.
//! These are compile-time literals, not runtime configuration: patients see
//! the same numbers the prompt hands to the model.

/// Main switchboard. Also quoted in [`FALLBACK_MESSAGE`].
pub const MAIN_PHONE: &str = "(555) 123-4567";
pub const EMERGENCY_PHONE: &str = "(555) 123-4911";
pub const ADDRESS: &str = "123 Medical Center Drive, Healthcare City, HC 12345";

/// Upper bound passed to the generation service for every request.
pub const MAX_OUTPUT_TOKENS: u32 = 300;

/// Inserted as the first transcript entry once a user is authenticated.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your hospital assistant. I'm here to help you with:\n\n\
• Scheduling appointments\n\
• General medical inquiries\n\
• Hospital information and directions\n\
• Emergency contact information\n\n\
How can I assist you today?";

/// Shown as a synthetic assistant message when the generation call fails,
/// whatever the underlying fault.
pub const FALLBACK_MESSAGE: &str = "I apologize, but I'm having trouble responding right now. \
Please try again or contact our main number at (555) 123-4567 for immediate assistance.";

/// Builds the full prompt sent to the generation service: the hospital
/// persona followed by the user's literal text.
pub fn build_prompt(user_text: &str) -> String {
    format!(
        "You are a helpful hospital assistant chatbot. Respond professionally and empathetically \
to patient inquiries.\n\n\
Context: You work for a general hospital that provides:\n\
- Emergency services (24/7)\n\
- General practice appointments (Mon-Fri 8AM-6PM, Sat 9AM-2PM)\n\
- Specialist consultations\n\
- Diagnostic services\n\
- Pharmacy services\n\n\
Hospital contact info:\n\
- Main number: {MAIN_PHONE}\n\
- Emergency: 911 or {EMERGENCY_PHONE}\n\
- Address: {ADDRESS}\n\n\
For appointment scheduling, collect: patient name, preferred date/time, reason for visit, \
and contact information.\n\n\
User message: \"{user_text}\"\n\n\
Provide a helpful, professional response. Keep it concise but informative."
    )
}

/// A canned prompt offered as a one-keypress alternative to typing.
/// Selecting one is behaviorally identical to typing `message` and
/// submitting it.
pub struct QuickAction {
    pub label: &'static str,
    pub message: &'static str,
}

/// The fixed, ordered quick-action menu, bound to F1–F4 in the TUI.
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Schedule Appointment",
        message: "I would like to schedule an appointment",
    },
    QuickAction {
        label: "Emergency Info",
        message: "I need emergency contact information",
    },
    QuickAction {
        label: "Hospital Hours",
        message: "What are the hospital hours?",
    },
    QuickAction {
        label: "Directions",
        message: "How do I get to the hospital?",
    },
];

/// Looks up a quick action by menu position (0-based).
pub fn quick_action(index: usize) -> Option<&'static QuickAction> {
    QUICK_ACTIONS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_user_text_verbatim() {
        let prompt = build_prompt("Where is the pharmacy?");
        assert!(prompt.contains("User message: \"Where is the pharmacy?\""));
    }

    #[test]
    fn test_prompt_carries_contact_constants() {
        let prompt = build_prompt("x");
        assert!(prompt.contains(MAIN_PHONE));
        assert!(prompt.contains(EMERGENCY_PHONE));
        assert!(prompt.contains(ADDRESS));
    }

    #[test]
    fn test_fallback_names_main_phone() {
        assert!(FALLBACK_MESSAGE.contains(MAIN_PHONE));
    }

    #[test]
    fn test_quick_action_lookup() {
        assert_eq!(
            quick_action(2).map(|a| a.message),
            Some("What are the hospital hours?")
        );
        assert!(quick_action(4).is_none());
    }
}
