use dioxus::prelude::*;

/// Pill badge colored by status label
#[component]
pub fn StatusBadge(status: String) -> Element {
    let color = badge_color(&status);
    rsx! {
        span { class: "inline-block px-3 py-1 rounded-full text-xs font-medium {color}",
            "{status}"
        }
    }
}

/// Badge colors keyed by the well-known lifecycle labels, case-insensitive.
/// Unknown labels (including raw numeric ids) get the neutral gray.
fn badge_color(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "pending" => "bg-yellow-100 text-yellow-800",
        "in transit" => "bg-blue-100 text-blue-800",
        "delivered" => "bg-green-100 text-green-800",
        "cancelled" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_color_known_labels() {
        assert_eq!(badge_color("Pending"), "bg-yellow-100 text-yellow-800");
        assert_eq!(badge_color("In Transit"), "bg-blue-100 text-blue-800");
        assert_eq!(badge_color("delivered"), "bg-green-100 text-green-800");
        assert_eq!(badge_color("CANCELLED"), "bg-red-100 text-red-800");
    }

    #[test]
    fn test_badge_color_unknown_label_is_gray() {
        assert_eq!(badge_color("archived"), "bg-gray-100 text-gray-800");
        assert_eq!(badge_color("7"), "bg-gray-100 text-gray-800");
    }
}
