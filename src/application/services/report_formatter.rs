pub const REPORT_TITLE: &str = "# AI 醫生診前報告\n\n";

pub const SECTION_KEYWORDS: [&str; 7] = [
    "基本信息",
    "健康状况",
    "飲食習慣",
    "挑戰與目標",
    "總結",
    "結論",
    "建議",
];

const MAX_HEADING_CHARS: usize = 30;
const MAX_KEY_CHARS: usize = 20;

/// Reflows generated prose into the Markdown report layout.
///
/// Single pass over trimmed lines:
/// - blank lines are kept as paragraph breaks;
/// - a short line carrying a section keyword becomes a `##` heading;
/// - `key: value` / `key：value` with a short key becomes `**key**：value`;
/// - anything else is copied verbatim.
///
/// Lengths are counted in characters.
pub fn format_report(raw: &str) -> String {
    let mut out = String::with_capacity(REPORT_TITLE.len() + raw.len() * 2);
    out.push_str(REPORT_TITLE);

    for line in raw.split('\n') {
        let line = line.trim();

        if line.is_empty() {
            out.push('\n');
            continue;
        }

        if is_section_heading(line) {
            out.push_str("\n## ");
            out.push_str(line);
            out.push_str("\n\n");
            continue;
        }

        match split_key_value(line) {
            Some((key, value)) => {
                out.push_str("**");
                out.push_str(key);
                out.push_str("**：");
                out.push_str(value);
                out.push_str("\n\n");
            }
            None => {
                out.push_str(line);
                out.push_str("\n\n");
            }
        }
    }

    out
}

fn is_section_heading(line: &str) -> bool {
    line.chars().count() < MAX_HEADING_CHARS
        && SECTION_KEYWORDS.iter().any(|keyword| line.contains(keyword))
}

// An ASCII colon takes precedence over a full-width one.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line
        .split_once(':')
        .or_else(|| line.split_once('：'))?;

    if key.chars().count() < MAX_KEY_CHARS {
        Some((key.trim(), value.trim()))
    } else {
        None
    }
}
