//! Screen copy and keyboard layouts.
//!
//! Templates use `**bold**` / `*italic*` and the `{contact}` placeholder;
//! see [`crate::telegram::markdown::render_template`].

use super::{Action, Button, Keyboard, Screen, ScreenId};
use crate::telegram::markdown::render_template;

const START: &str = "🎨 **Welcome to Canva Pro Premium Access Bot!**\n\n\
💎 *Design without limits* — Get genuine **Canva Pro** instantly!\n\n\
✅ 100% Safe & Verified (No cracked or illegal accounts)\n\
⚡ Instant Delivery | 🎓 Lifetime & Team Access | 🔒 Secure & Trusted\n\n\
👨‍💼 Admin Support: {contact}\n\n\
👇 Choose an option below to begin your journey:";

const WELCOME_BACK: &str = "🎨 **Welcome Back! Choose an option below 👇";

const PLANS_COMMAND: &str = "💰 **Canva Pro Premium Plans**\n\n\
🟢 1 Month Access — ₹50\n\
🟡 3 Months Access — ₹120\n\
🔵 6 Months Access — ₹200\n\
💎 Lifetime Access — ₹499\n\n\
🎓 Education Plans Available (For Students & Creators)\n\n\
⚡ *Instant activation after verification!*";

const PLANS_BUTTON: &str = "💰 **Our Canva Pro Plans**\n\n\
🟢 1 Month — ₹50\n\
🟡 3 Months — ₹120\n\
🔵 6 Months — ₹200\n\
💎 Lifetime — ₹499\n\n\
🎓 Education Plans Available!\n\
Click *Buy Now* to get started 👇";

const BUY_COMMAND: &str = "🛍️ **Buy Canva Pro Now**\n\n\
💬 Contact Admin: {contact}\n\n\
💎 Pay only after verification ✅\n\
⚡ Instant access once confirmed\n\
🎨 Start designing like a pro within minutes!";

const BUY_BUTTON: &str = "🛍️ **Buy Canva Pro Premium**\n\n\
👨‍💼 Contact Admin: {contact}\n\n\
💎 Pay After Verification ✅\n\
⚡ Instant Delivery | 100% Secure";

const WHYUS_COMMAND: &str = "🧠 **Why Choose Us?**\n\n\
✅ We don’t sell cracked or fake accounts.\n\
🔐 All accounts are 100% safe & verified.\n\
⚡ Instant delivery with lifetime replacement guarantee.\n\
🎓 Special student access for education users.\n\
💬 24×7 active support — we care about your satisfaction!\n\n\
💎 *Join thousands of happy Canva users today!*";

const WHYUS_BUTTON: &str = "🧠 **Why Choose Us?**\n\n\
✅ Genuine Canva Pro — No cracked or risky accounts.\n\
🔒 Safe & Verified with instant access.\n\
🎓 Student access available.\n\
💬 24×7 Customer Support.\n\n\
💎 *Trusted by 5000+ users across India!*";

const REVIEWS_COMMAND: &str = "⭐ **Customer Reviews** ⭐\n\n\
👩‍🎨 ‘Got my account in 2 minutes. Legit and smooth!’\n\
👨‍💻 ‘Best service ever! I’ve been using Canva Pro daily.’\n\
🎓 ‘Loved the student plan. Highly recommended!’\n\n\
💬 Want to share your feedback?\n\
Message {contact} ❤️";

const REVIEWS_BUTTON: &str = "⭐ **User Reviews** ⭐\n\n\
🧑‍🎨 ‘Got Canva Pro in 2 minutes! Excellent service.’\n\
👩‍💻 ‘Very supportive admin, helped instantly.’\n\
🎓 ‘Perfect for students & freelancers.’";

const TRIAL: &str = "🎓 **Free Trial Access**\n\n\
👋 Get a short Canva Pro trial absolutely FREE!\n\
💬 Contact Admin to claim your trial now:\n\
{contact}\n\n\
⚡ Limited spots available — don’t miss it!";

const HELP_COMMAND: &str = "💬 **Need Help or Have Questions?**\n\n\
📞 Contact Admin: {contact}\n\
⚡ We reply instantly — your satisfaction is our top priority!\n\
🎯 Whether it’s setup, payment, or renewal — we’re here 24×7.";

const HELP_BUTTON: &str = "💬 Need Help?\n\n📞 Contact {contact}\nWe’re available 24×7 ❤️";

pub fn main_menu() -> Keyboard {
    Keyboard::new(vec![
        vec![
            Button::new("💰 View Plans", Action::Plans),
            Button::new("🛍️ Buy Now", Action::Buy),
        ],
        vec![
            Button::new("🎓 Try Free Trial", Action::Trial),
            Button::new("⭐ Reviews", Action::Reviews),
        ],
        vec![
            Button::new("🧠 Why Choose Us", Action::WhyUs),
            Button::new("📞 Contact", Action::Help),
        ],
    ])
}

pub fn plans_menu() -> Keyboard {
    Keyboard::new(vec![
        vec![Button::new("🛍️ Buy Now", Action::Buy)],
        vec![Button::new("⬅️ Back", Action::Back)],
    ])
}

pub fn back_to_menu() -> Keyboard {
    Keyboard::new(vec![vec![Button::new("⬅️ Back to Menu", Action::Back)]])
}

fn screen(id: ScreenId, template: &str, contact: &str) -> Screen {
    let keyboard = match id {
        ScreenId::Start => main_menu(),
        ScreenId::Plans => plans_menu(),
        _ => back_to_menu(),
    };
    Screen {
        id,
        body: render_template(template, contact),
        keyboard,
    }
}

/// Screens sent as new messages in reply to slash-commands
pub fn command_screens(contact: &str) -> Vec<(&'static str, Screen)> {
    vec![
        ("start", screen(ScreenId::Start, START, contact)),
        ("plans", screen(ScreenId::Plans, PLANS_COMMAND, contact)),
        ("buy", screen(ScreenId::Buy, BUY_COMMAND, contact)),
        ("whyus", screen(ScreenId::WhyUs, WHYUS_COMMAND, contact)),
        ("reviews", screen(ScreenId::Reviews, REVIEWS_COMMAND, contact)),
        ("help", screen(ScreenId::Help, HELP_COMMAND, contact)),
    ]
}

/// Screens edited into place when an inline button is pressed
pub fn action_screens(contact: &str) -> Vec<(Action, Screen)> {
    Action::ALL
        .into_iter()
        .map(|action| {
            let template = match action {
                Action::Plans => PLANS_BUTTON,
                Action::Buy => BUY_BUTTON,
                Action::WhyUs => WHYUS_BUTTON,
                Action::Reviews => REVIEWS_BUTTON,
                Action::Trial => TRIAL,
                Action::Help => HELP_BUTTON,
                Action::Back => WELCOME_BACK,
                Action::Start => START,
            };
            (action, screen(action.target(), template, contact))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_layout() {
        assert_eq!(
            main_menu().layout(),
            vec![
                vec!["plans", "buy"],
                vec!["trial", "reviews"],
                vec!["whyus", "help"],
            ]
        );
    }

    #[test]
    fn test_back_labels() {
        assert_eq!(plans_menu().rows()[1][0].label, "⬅️ Back");
        assert_eq!(back_to_menu().rows()[0][0].label, "⬅️ Back to Menu");
    }

    #[test]
    fn test_command_screens_cover_registered_commands() {
        let names: Vec<_> = command_screens("@a").into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["start", "plans", "buy", "whyus", "reviews", "help"]);
    }

    #[test]
    fn test_trial_has_no_command_screen() {
        assert!(command_screens("@a")
            .iter()
            .all(|(_, s)| s.id != ScreenId::Trial));
    }

    #[test]
    fn test_action_screens_cover_closed_set() {
        assert_eq!(action_screens("@a").len(), Action::ALL.len());
    }

    #[test]
    fn test_contact_screens_render_handle() {
        let contact = "@promo_admin";
        for (_, s) in command_screens(contact) {
            if matches!(s.id, ScreenId::Start | ScreenId::Buy | ScreenId::Reviews | ScreenId::Help) {
                assert!(s.body.contains(contact), "{:?} is missing the contact", s.id);
            }
        }
        for (action, s) in action_screens(contact) {
            if matches!(action, Action::Buy | Action::Trial | Action::Help) {
                assert!(s.body.contains(contact), "{action} is missing the contact");
            }
        }
    }

    #[test]
    fn test_bodies_are_html() {
        let screens = command_screens("@a");
        let (_, start) = &screens[0];
        assert!(start
            .body
            .starts_with("🎨 <b>Welcome to Canva Pro Premium Access Bot!</b>"));
        assert!(start.body.contains("<i>Design without limits</i>"));
        assert!(start.body.contains("Safe &amp; Verified"));
        assert!(!start.body.contains("**"));
    }

    #[test]
    fn test_welcome_back_body() {
        let screens = action_screens("@a");
        let (_, back) = screens
            .iter()
            .find(|(a, _)| *a == Action::Back)
            .expect("back screen");
        assert_eq!(back.id, ScreenId::Start);
        assert_eq!(back.body, "🎨 <b>Welcome Back! Choose an option below 👇</b>");
        assert_eq!(back.keyboard, main_menu());
    }
}
