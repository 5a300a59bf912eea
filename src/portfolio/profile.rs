//! Who the site is about and where it links to.

pub const OWNER: &str = "Kunal Bhandari";
pub const FIRST_NAME: &str = "Kunal";
pub const TITLE: &str = "Full Stack Developer";
pub const TAGLINE: &str =
    "Full Stack Developer passionate about creating innovative solutions and building exceptional user experiences.";

pub const EMAIL: &str = "kunalxbhandari@gmail.com";
pub const PHONE: &str = "+918360135175";
pub const LOCATION: &str = "India";

pub const GITHUB_URL: &str = "https://github.com/kunalxbhandari-git";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/kunalxbhandari";

pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Kunal_Bhandari_Resume.pdf";

pub const SCHEDULING_PAGE_URL: &str = "https://cal.com/kunal-bhandari/30min";

pub const MAILTO: &str = "mailto:kunalxbhandari@gmail.com";

/// An outbound link shown as an icon (footer, hero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub hover_class: &'static str,
}

pub fn social_links() -> [SocialLink; 3] {
    [
        SocialLink {
            name: "GitHub",
            url: GITHUB_URL,
            icon: "devicon-github-original",
            hover_class: "hover:text-gray-900 dark:hover:text-white",
        },
        SocialLink {
            name: "LinkedIn",
            url: LINKEDIN_URL,
            icon: "devicon-linkedin-plain",
            hover_class: "hover:text-blue-600",
        },
        SocialLink {
            name: "Email",
            url: MAILTO,
            icon: "icon-mail",
            hover_class: "hover:text-red-500",
        },
    ]
}

/// The copyright year, taken from the build timestamp written by build.rs.
pub fn copyright_year() -> i32 {
    use chrono::{DateTime, Datelike};

    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.year())
        .unwrap_or(2025)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_matches_email() {
        assert_eq!(MAILTO.strip_prefix("mailto:"), Some(EMAIL));
    }

    #[test]
    fn test_copyright_year_from_build_time() {
        assert_eq!(copyright_year().to_string(), &env!("BUILD_TIME")[..4]);
    }

    #[test]
    fn test_social_links_are_named() {
        let names = social_links().map(|l| l.name);
        assert_eq!(names, ["GitHub", "LinkedIn", "Email"]);
    }

    #[test]
    fn test_social_icons_have_styles() {
        let css = include_str!("../../input.css");
        for link in social_links() {
            assert!(
                link.icon.starts_with("devicon-") || css.contains(&format!(".{}::before", link.icon)),
                "{} icon renders nothing",
                link.name
            );
        }
    }
}
