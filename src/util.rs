// Small formatting and logging helpers shared by the views.

/// Groups digits in threes with commas, like `Number.toLocaleString` in en-US.
pub fn format_score(score: u64) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole distance units travelled; fractions are dropped.
pub fn format_distance(distance: f64) -> String {
    format!("{}", distance.max(0.0).floor() as u64)
}

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg; // console only exists in the browser
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_grouping() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(999), "999");
        assert_eq!(format_score(1000), "1,000");
        assert_eq!(format_score(1234567), "1,234,567");
        assert_eq!(format_score(100000), "100,000");
    }

    #[test]
    fn distance_is_floored() {
        assert_eq!(format_distance(41.99), "41");
        assert_eq!(format_distance(0.2), "0");
        assert_eq!(format_distance(-3.0), "0");
    }
}
