/// Format a pixel value the way CSS expects it (`8px`, `1.5px`)
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Round to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Collapse four box sides into the shortest CSS shorthand
///
/// Returns `None` when every side is zero.
pub fn css_shorthand(top: f64, right: f64, bottom: f64, left: f64) -> Option<String> {
    if top == 0.0 && right == 0.0 && bottom == 0.0 && left == 0.0 {
        return None;
    }

    if top == right && right == bottom && bottom == left {
        return Some(px(top));
    }

    if right == left {
        if top == bottom {
            return Some(format!("{} {}", px(top), px(right)));
        }
        return Some(format!("{} {} {}", px(top), px(right), px(bottom)));
    }

    Some(format!(
        "{} {} {} {}",
        px(top),
        px(right),
        px(bottom),
        px(left)
    ))
}
