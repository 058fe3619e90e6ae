use std::str::FromStr;

use commentary_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        chrono_tz::Tz::from_str(&name).unwrap_or_else(|err| {
            tracing::warn!(%name, ?err, "host timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

pub fn format_date(date: &Time) -> String {
    date.with_timezone(&local_tz())
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
