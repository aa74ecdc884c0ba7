use docubuilder_types::Icon;

/// Terminal glyph for an icon. Single-width symbols only, so rows line up.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "⌂",
        Icon::FileText => "▤",
        Icon::LayoutTemplate => "▦",
        Icon::Users => "☺",
        Icon::DollarSign => "$",
        Icon::ShoppingBag => "◫",
        Icon::FileSpreadsheet => "▥",
        Icon::Zap => "ϟ",
        Icon::BarChart3 => "▟",
        Icon::Code2 => "λ",
        Icon::Puzzle => "✣",
        Icon::GraduationCap => "◎",
        Icon::UserPlus => "⊕",
        Icon::Settings => "⚙",
        Icon::Plus => "+",
        Icon::PanelLeft => "»",
        Icon::PanelLeftClose => "«",
        Icon::ChevronDown => "▾",
        Icon::ChevronRight => "▸",
        Icon::Search => "⌕",
        Icon::Filter => "▽",
        Icon::List => "☰",
        Icon::LayoutGrid => "⊞",
        Icon::Upload => "⇧",
        Icon::Save => "✓",
        Icon::Share => "⇗",
        Icon::Download => "⇩",
        Icon::MoreHorizontal => "…",
        Icon::Type => "T",
        Icon::Image => "▨",
        Icon::Table => "⊟",
        Icon::Signature => "✎",
    }
}

/// Disclosure marker for a group row.
pub fn disclosure(expanded: bool) -> &'static str {
    glyph(if expanded { Icon::ChevronDown } else { Icon::ChevronRight })
}

#[cfg(test)]
mod tests {
    use super::*;
    use docubuilder_types::NavModel;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn navigation_glyphs_are_single_column() {
        for entry in NavModel::standard().entries() {
            assert_eq!(glyph(entry.icon).width(), 1, "{}", entry.label);
        }
    }
}
