use super::EconomySnapshot;

const SUFFIXES: [&str; 11] = ["", "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No"];

/// Compact number for HUD labels: `"42.50"`, `"1.23K"`, `"456M"`.
pub fn abbreviate(value: f64) -> String {
    if value < 100.0 {
        return format!("{value:.2}");
    }

    let last = SUFFIXES.len() - 1;
    let mut mantissa = value;
    let mut index = 0;
    while mantissa >= 1_000.0 && index < last {
        mantissa /= 1_000.0;
        index += 1;
    }
    // 999.7K would print as "1000K".
    if mantissa >= 999.5 && index < last {
        mantissa /= 1_000.0;
        index += 1;
    }

    let suffix = SUFFIXES[index];
    if mantissa >= 100.0 {
        format!("{mantissa:.0}{suffix}")
    } else if mantissa >= 10.0 {
        format!("{mantissa:.1}{suffix}")
    } else {
        format!("{mantissa:.2}{suffix}")
    }
}

/// Production line shown under the resource counter.
pub fn status_line(snapshot: &EconomySnapshot) -> String {
    let rate = format!("/s {}", abbreviate(snapshot.production_rate));
    if !snapshot.auto_click_enabled {
        return rate;
    }
    format!(
        "{rate}  |  auto +{} every {:.2}s",
        abbreviate(snapshot.click_yield),
        snapshot.auto_click_period
    )
}
