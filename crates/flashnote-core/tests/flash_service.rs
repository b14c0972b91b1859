use flashnote_bridge::{FLASH_SESSION_KEY, Level, MemorySession, Message, SessionBridge};
use flashnote_core::{FlashError, FlashService};
use serde_json::json;

#[test]
fn overlay_notice_survives_into_the_next_request() {
    let mut flash = FlashService::new(MemorySession::new());
    flash.message("Thank You").overlay();

    let expected = Message {
        title: "Notice".to_string(),
        message: "Thank You".to_string(),
        level: Level::Info,
        important: false,
        overlay: true,
    };
    assert_eq!(flash.messages(), &[expected.clone()]);

    let session = flash.into_session();
    assert_eq!(session.flash_count(FLASH_SESSION_KEY), 2);
    assert_eq!(session.records()[0].value[0].title, "");
    assert_eq!(session.get(FLASH_SESSION_KEY), Some(&[expected][..]));
}

#[test]
fn queue_can_be_built_over_a_borrowed_session() {
    let mut session = MemorySession::new();
    {
        let mut flash = FlashService::new(&mut session);
        flash.message("Saved").success();
        flash.message("Quota almost reached").warning().important();
    }

    let lengths: Vec<usize> = session
        .records()
        .iter()
        .map(|record| record.value.len())
        .collect();
    assert_eq!(lengths, vec![1, 1, 2, 2, 2]);
    assert_eq!(session.flash_count(FLASH_SESSION_KEY), 5);

    let stored = session.get(FLASH_SESSION_KEY).expect("queue was flashed");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].level, Level::Success);
    assert_eq!(stored[1].level, Level::Warning);
    assert!(stored[1].important);
}

#[test]
fn cleared_queue_is_flashed_again_on_the_next_message() {
    let mut flash = FlashService::new(MemorySession::new());
    flash.message("First");
    flash.clear();
    flash.overlay_with_title("Overlay message.", "Overlay Title");

    assert_eq!(flash.messages().len(), 1);
    let stored = flash
        .session()
        .get(FLASH_SESSION_KEY)
        .expect("queue was flashed");
    assert_eq!(stored, flash.messages());
    assert_eq!(stored[0].title, "Overlay Title");
    assert!(stored[0].overlay);
}

struct CountingSession {
    writes: usize,
    last_len: usize,
}

impl SessionBridge for CountingSession {
    fn flash(&mut self, key: &str, value: &[Message]) {
        assert_eq!(key, FLASH_SESSION_KEY);
        self.writes += 1;
        self.last_len = value.len();
    }
}

#[test]
fn every_modifier_is_one_session_write() {
    let mut flash = FlashService::new(CountingSession {
        writes: 0,
        last_len: 0,
    });
    flash.message("One").error().important().overlay();
    flash.overlay("Two");

    let session = flash.session();
    assert_eq!(session.writes, 6);
    assert_eq!(session.last_len, 2);
}

#[test]
fn extensions_are_invoked_by_name() {
    let mut flash = FlashService::new(MemorySession::new());
    flash.register_extension("passthru", |_, args| json!(args));
    flash.register_extension("count", |flash, _| json!(flash.messages().len()));

    flash.message("Test");

    assert_eq!(
        flash.call("passthru", &[json!("Macroable message"), json!(2)]),
        Ok(json!(["Macroable message", 2]))
    );
    assert_eq!(flash.call("count", &[]), Ok(json!(1)));

    flash.register_extension("count", |_, _| json!("replaced"));
    assert_eq!(flash.call("count", &[]), Ok(json!("replaced")));

    let error = flash.call("shout", &[]).expect_err("nothing registered");
    assert_eq!(
        error,
        FlashError::UnknownOperation {
            name: "shout".to_string()
        }
    );
    assert_eq!(error.to_string(), "unknown operation 'shout'");
}
