use crate::output::Scrollback;
use crate::theme::ThemeCell;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use rand::{Rng, RngCore};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, EnumString, EnumIter, IntoStaticStr, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum CommandKind {
    #[strum(serialize = "help")]
    Help,
    #[strum(serialize = "about")]
    About,
    #[strum(serialize = "skills")]
    Skills,
    #[strum(serialize = "projects")]
    Projects,
    #[strum(serialize = "contact")]
    Contact,
    #[strum(serialize = "clear")]
    Clear,
    #[strum(serialize = "theme")]
    Theme,
    #[strum(serialize = "social")]
    Social,
    #[strum(serialize = "education")]
    Education,
    #[strum(serialize = "time")]
    Time,
    #[strum(serialize = "weather")]
    Weather,
    #[strum(serialize = "ascii")]
    Ascii,
}

/// What a handler may touch besides its returned lines.
pub struct CommandContext<'a> {
    pub theme: &'a ThemeCell,
    pub scrollback: &'a mut Scrollback,
    pub rng: &'a mut dyn RngCore,
    pub now: DateTime<Local>,
}

/// Looks up a command by name, ignoring case and surrounding whitespace.
pub fn lookup(name: &str) -> Option<CommandKind> {
    name.trim().parse().ok()
}

pub fn builtin_commands() -> Vec<String> {
    CommandKind::iter().map(|k| k.name().to_string()).collect()
}

impl CommandKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn description(self) -> &'static str {
        match self {
            CommandKind::Help => "Show this help message",
            CommandKind::About => "Learn more about me",
            CommandKind::Skills => "List my technical skills",
            CommandKind::Projects => "View my projects",
            CommandKind::Contact => "Get my contact information",
            CommandKind::Clear => "Clear the terminal",
            CommandKind::Theme => "Toggle light/dark theme",
            CommandKind::Social => "View my social media links",
            CommandKind::Education => "View my education details",
            CommandKind::Time => "Show current time",
            CommandKind::Weather => "Show weather (demo)",
            CommandKind::Ascii => "Show ASCII art",
        }
    }

    pub fn run(self, ctx: &mut CommandContext<'_>) -> Vec<String> {
        match self {
            CommandKind::Help => help(),
            CommandKind::About => lines(ABOUT),
            CommandKind::Skills => lines(SKILLS),
            CommandKind::Projects => lines(PROJECTS),
            CommandKind::Contact => lines(CONTACT),
            CommandKind::Clear => {
                ctx.scrollback.clear();
                Vec::new()
            }
            CommandKind::Theme => {
                let theme = ctx.theme.toggle();
                vec![format!("Theme toggled! Now using {theme} theme.")]
            }
            CommandKind::Social => lines(SOCIAL),
            CommandKind::Education => education(ctx.now.with_timezone(&Utc)),
            CommandKind::Time => vec![format!(
                "Current time: {}",
                ctx.now.format("%Y-%m-%d %H:%M:%S")
            )],
            CommandKind::Weather => lines(WEATHER),
            CommandKind::Ascii => ascii(ctx.rng.gen_range(0..ASCII_ARTS.len())),
        }
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}

fn help() -> Vec<String> {
    let mut out = vec!["Available commands:".to_string()];
    out.extend(
        CommandKind::iter().map(|k| format!("  {:<9} - {}", k.name(), k.description())),
    );
    out
}

const ABOUT: &[&str] = &[
    "About Jay Prajapati:",
    "I am a passionate Web Developer and Digital Marketing Expert",
    "Currently pursuing Diploma in Information Technology",
    "Expertise in:",
    "• Full-stack web development",
    "• Python and Java programming",
    "• Digital marketing strategies",
    "• UI/UX design",
    "",
    "Type \"skills\" to see my technical expertise in detail.",
];

const SKILLS: &[&str] = &[
    "Technical Skills:",
    "",
    "Programming:",
    "• Python - Advanced",
    "• Java   - Intermediate",
    "• C      - Intermediate",
    "",
    "Web Development:",
    "• HTML/CSS    - Advanced",
    "• JavaScript  - Intermediate",
    "• Bootstrap   - Advanced",
    "• GSAP        - Intermediate",
    "",
    "Digital Marketing:",
    "• SEO Optimization",
    "• Content Strategy",
    "• Social Media Marketing",
];

const PROJECTS: &[&str] = &[
    "Featured Projects:",
    "",
    "1. Portfolio Website",
    "   • Modern, responsive design",
    "   • Dark/light theme support",
    "   • Interactive CLI interface",
    "",
    "2. SSIP Project Winner",
    "   • Innovative tech solution",
    "   • Award-winning project",
    "",
    "More projects on GitHub!",
];

const CONTACT: &[&str] = &[
    "Contact Information:",
    "",
    "Professional:",
    "• Email: [Your Email]",
    "• LinkedIn: linkedin.com/in/jayprajapati171120",
    "",
    "Social:",
    "• GitHub: github.com/jayprajapati-dev",
    "• Instagram: @prajapati_jay_1711",
    "",
    "Type \"social\" for all social links",
];

const SOCIAL: &[&str] = &[
    "Social Media Links:",
    "",
    "🔗 LinkedIn:  linkedin.com/in/jayprajapati171120",
    "🔗 GitHub:    github.com/jayprajapati-dev",
    "🔗 Instagram: instagram.com/prajapati_jay_1711",
    "",
    "Feel free to connect!",
];

const WEATHER: &[&str] = &[
    "Current Weather (Demo):",
    "📍 Gujarat, India",
    "🌡️ Temperature: 28°C",
    "☀️ Condition: Sunny",
    "💨 Wind: 12 km/h",
];

const COURSE_START: (i32, u32, u32) = (2023, 6, 1);
const COURSE_END: (i32, u32, u32) = (2026, 5, 31);
const SEMESTERS: i64 = 6;
/// Six 30-day months.
const SEMESTER_SECS: i64 = 6 * 30 * 86_400;

fn utc_midnight((y, m, d): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Course dates are UTC midnights, so the course is over once its end date
/// has begun. The count is clamped to 1..=6.
pub fn current_semester(now: DateTime<Utc>) -> Option<i64> {
    let (start, end) = (utc_midnight(COURSE_START), utc_midnight(COURSE_END));
    if now > end {
        return None;
    }
    let secs = (now - start).num_seconds().max(0);
    let semester = (secs + SEMESTER_SECS - 1) / SEMESTER_SECS;
    Some(semester.clamp(1, SEMESTERS))
}

fn education(now: DateTime<Utc>) -> Vec<String> {
    let mut out = lines(&[
        "Education:",
        "",
        "Diploma in Information Technology",
        "• Gujarat Technological University",
    ]);
    match current_semester(now) {
        None => out.push("• Completed (2023 - 2026)".to_string()),
        Some(semester) => {
            out.push("• 2023 - 2026".to_string());
            out.push(format!("• Current Semester: {semester} of {SEMESTERS}"));
        }
    }
    out.extend(lines(&[
        "",
        "Achievements:",
        "• SSIP Palanpur 2024 Winner",
        "• Python Certification",
    ]));
    out
}

const ASCII_ARTS: &[&[&str]] = &[
    &[
        "     ╔═══╗╔═══╗",
        "     ║╔═╗║║╔═╗║",
        "     ║║─║║║╚═╝║",
        "     ║╚═╝║║╔══╝",
        "╔═══╗║╔═╗║║║   ",
        "╚═══╝╚╝─╚╝╚╝   ",
        "< Jay Prajapati >",
    ],
    &[
        "  ┌─────────────┐ ",
        "  │ JAY         │▒",
        "  │ PRAJAPATI   │▒",
        "  │ DEV         │▒",
        "  └─────────────┘▒",
        "   ▒▒▒▒▒▒▒▒▒▒▒▒▒▒",
    ],
    &[
        "╭──────────────────╮",
        "│ $ whoami         │",
        "│ > Jay Prajapati  │",
        "│ $ role          │",
        "│ > Web Developer  │",
        "│ $ status        │",
        "│ > Coding...     │",
        "╰──────────────────╯",
    ],
    &[
        "  ╭───────╮  ",
        " /    J    \\ ",
        "│     P     │",
        " \\   DEV   / ",
        "  ╰───────╯  ",
    ],
    &[
        " {",
        "   \"name\": \"Jay\",",
        "   \"role\": \"Developer\",",
        "   \"skills\": [\"Web\", \"Python\", \"Java\"],",
        "   \"status\": \"Available for projects\"",
        " }",
    ],
];

/// Renders art `index` with a separator as wide as its widest line.
pub fn ascii(index: usize) -> Vec<String> {
    let art = ASCII_ARTS[index % ASCII_ARTS.len()];
    let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = vec![String::new()];
    out.extend(lines(art));
    out.push(String::new());
    out.push("─".repeat(width));
    out.push("Type \"ascii\" again for a different design!".to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::EntryKind;
    use crate::theme::Theme;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn run(kind: CommandKind, theme: &ThemeCell, scrollback: &mut Scrollback) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ctx = CommandContext {
            theme,
            scrollback,
            rng: &mut rng,
            now: at(2024, 1, 15),
        };
        kind.run(&mut ctx)
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("HELP"), Some(CommandKind::Help));
        assert_eq!(lookup("  Ascii "), Some(CommandKind::Ascii));
        assert_eq!(lookup("frobnicate"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_builtin_names() {
        let names = builtin_commands();
        assert_eq!(names.len(), 12);
        assert_eq!(names[0], "help");
        assert!(names.contains(&"education".to_string()));
    }

    #[test]
    fn test_help_lists_every_command() {
        let out = help();
        assert_eq!(out[0], "Available commands:");
        assert_eq!(out.len(), 13);
        assert_eq!(out[1], "  help      - Show this help message");
        assert_eq!(out[12], "  ascii     - Show ASCII art");
    }

    #[test]
    fn test_theme_toggles_shared_cell() {
        let theme = ThemeCell::new(Theme::Dark);
        let mut log = Scrollback::new();
        let out = run(CommandKind::Theme, &theme, &mut log);
        assert_eq!(out, vec!["Theme toggled! Now using light theme."]);
        assert_eq!(theme.get(), Theme::Light);
    }

    #[test]
    fn test_clear_truncates_log() {
        let theme = ThemeCell::default();
        let mut log = Scrollback::new();
        log.push(EntryKind::Output, "old");
        let out = run(CommandKind::Clear, &theme, &mut log);
        assert!(out.is_empty());
        assert!(log.is_empty());
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_semester() {
        assert_eq!(current_semester(utc(2023, 6, 1, 0)), Some(1));
        assert_eq!(current_semester(utc(2023, 11, 28, 0)), Some(1));
        assert_eq!(current_semester(utc(2023, 12, 1, 0)), Some(2));
        assert_eq!(current_semester(utc(2024, 1, 15, 0)), Some(2));
        assert_eq!(current_semester(utc(2026, 5, 30, 23)), Some(6));
    }

    #[test]
    fn test_semester_turns_over_during_day_180() {
        assert_eq!(current_semester(utc(2023, 11, 28, 12)), Some(2));
        assert_eq!(current_semester(utc(2024, 5, 26, 12)), Some(3));
    }

    #[test]
    fn test_course_over_on_end_date() {
        assert_eq!(current_semester(utc(2026, 5, 31, 1)), None);
        assert_eq!(current_semester(utc(2026, 5, 31, 12)), None);
        assert_eq!(current_semester(utc(2026, 6, 1, 0)), None);
    }

    #[test]
    fn test_education_completed() {
        let out = education(utc(2026, 10, 19, 9));
        assert!(out.contains(&"• Completed (2023 - 2026)".to_string()));
        let out = education(utc(2024, 1, 15, 9));
        assert!(out.contains(&"• Current Semester: 2 of 6".to_string()));
    }

    #[test]
    fn test_terminal_style_art_matches_authored_text() {
        let out = ascii(2);
        assert_eq!(out[4], "│ $ role          │");
        assert_eq!(out[6], "│ $ status        │");
        assert_eq!(out[7], "│ > Coding...     │");
        assert_eq!(ascii(0)[6], "╚═══╝╚╝─╚╝╚╝   ");
    }

    #[test]
    fn test_contact_lists_email() {
        let theme = ThemeCell::default();
        let mut log = Scrollback::new();
        let out = run(CommandKind::Contact, &theme, &mut log);
        assert_eq!(out[3], "• Email: [Your Email]");
    }

    #[test]
    fn test_ascii_separator_width() {
        let out = ascii(3);
        assert_eq!(out[0], "");
        assert_eq!(out[out.len() - 2], "─".repeat(13));
        assert_eq!(
            out.last().unwrap(),
            "Type \"ascii\" again for a different design!"
        );
        assert_eq!(out.len(), ASCII_ARTS[3].len() + 4);
    }

    #[test]
    fn test_time_uses_clock() {
        let theme = ThemeCell::default();
        let mut log = Scrollback::new();
        let out = run(CommandKind::Time, &theme, &mut log);
        assert_eq!(out, vec!["Current time: 2024-01-15 12:00:00"]);
    }
}
