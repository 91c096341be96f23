use chrono::{DateTime, TimeZone, Utc};

use crate::server::model::user::ResolveUserParam;

mod class;

/// Identity and profile for a caller with the given Telegram ID
fn caller(telegram_id: i64) -> ResolveUserParam {
    ResolveUserParam {
        telegram_id,
        first_name: format!("User{}", telegram_id),
        last_name: None,
        username: None,
    }
}

fn class_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 3, 1, 17, 0, 0).unwrap()
}
