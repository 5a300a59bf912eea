//! Static gallery data: projects, tech stack and the About stats.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Repository,
    LiveSite,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Repository => "View Code",
            Self::LiveSite => "Open Site",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Repository => "devicon-github-original",
            Self::LiveSite => "icon-external",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
    pub link_kind: LinkKind,
    pub featured: bool,
}

pub static PROJECTS: [ProjectEntry; 6] = [
    ProjectEntry {
        id: 1,
        title: "AI Fake News Detector",
        description: "AI fake news detector with 92.5% accuracy using machine learning and NLP. Features real-time analysis, confidence scoring, external verification, and responsive UI with 6 themes. Includes voice input, PDF export, and social sharing.",
        image: "/pictures/fake-news-detector.jpg",
        technologies: &["Python", "Flask", "scikit-learn", "JavaScript", "Bootstrap", "NLP"],
        link: "https://github.com/kunalxbhandari-git/fake-news-detector",
        link_kind: LinkKind::Repository,
        featured: true,
    },
    ProjectEntry {
        id: 2,
        title: "E-Commerce Website",
        description: "A full-stack e-commerce platform built with modern web technologies. Features include user authentication, product catalog, shopping cart, and responsive design for seamless shopping experience.",
        image: "/pictures/ecommerce-website.jpg",
        technologies: &["TypeScript", "React", "Node.js", "MongoDB"],
        link: "https://github.com/kunalxbhandari-git/ECOMMERCE_WEBSITE",
        link_kind: LinkKind::Repository,
        featured: false,
    },
    ProjectEntry {
        id: 3,
        title: "Telegram Promo Bot",
        description: "Automated Telegram bot for promotional activities and user engagement. Built with Python, featuring message automation, user management, and analytics dashboard.",
        image: "/pictures/telegram-promo-bot.jpg",
        technologies: &["Python", "Telegram API", "SQLite", "Automation"],
        link: "https://github.com/kunalxbhandari-git/Telegram_promo",
        link_kind: LinkKind::Repository,
        featured: false,
    },
    ProjectEntry {
        id: 4,
        title: "Telegram Script Manager",
        description: "Advanced Telegram script management system with automated workflows, message scheduling, and user interaction tracking. Designed for efficient Telegram automation.",
        image: "/pictures/telegram-script-manager.jpg",
        technologies: &["Python", "Telegram API", "Asyncio", "Database"],
        link: "https://github.com/kunalxbhandari-git/Telegram_script",
        link_kind: LinkKind::Repository,
        featured: false,
    },
    ProjectEntry {
        id: 5,
        title: "Dracula SMM",
        description: "Social Media Marketing automation tool designed for efficient social media management and engagement. Features automated posting, analytics tracking, and multi-platform integration for streamlined social media operations.",
        image: "/pictures/dracula-smm.jpg",
        technologies: &["JavaScript", "Node.js", "Express", "API Development"],
        link: "https://draculasmm.xyz/",
        link_kind: LinkKind::LiveSite,
        featured: true,
    },
    ProjectEntry {
        id: 6,
        title: "Portfolio Website",
        description: "Modern, responsive portfolio website showcasing projects and skills. Built with Rust and Leptos, featuring dark mode, animations, and optimized performance.",
        image: "/pictures/portfolio-website.jpg",
        technologies: &["Rust", "Leptos", "TailwindCSS", "WebAssembly"],
        link: "https://github.com/kunalxbhandari-git/portfolio",
        link_kind: LinkKind::Repository,
        featured: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tech {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub static TECH_STACK: [Tech; 12] = [
    Tech { name: "React", icon: "devicon-react-original", color: "text-blue-500" },
    Tech { name: "Node.js", icon: "devicon-nodejs-plain", color: "text-green-500" },
    Tech { name: "Python", icon: "devicon-python-plain", color: "text-yellow-500" },
    Tech { name: "JavaScript", icon: "devicon-javascript-plain", color: "text-yellow-400" },
    Tech { name: "TypeScript", icon: "devicon-typescript-plain", color: "text-blue-600" },
    Tech { name: "HTML5", icon: "devicon-html5-plain", color: "text-orange-500" },
    Tech { name: "CSS3", icon: "devicon-css3-plain", color: "text-blue-400" },
    Tech { name: "MongoDB", icon: "devicon-mongodb-plain", color: "text-green-600" },
    Tech { name: "TailwindCSS", icon: "devicon-tailwindcss-original", color: "text-cyan-500" },
    Tech { name: "Next.js", icon: "devicon-nextjs-plain", color: "text-gray-900 dark:text-white" },
    Tech { name: "Express", icon: "devicon-express-original", color: "text-gray-700 dark:text-gray-300" },
    Tech { name: "Git", icon: "devicon-git-plain", color: "text-orange-600" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "20+", label: "Projects Completed" },
    Stat { value: "5+", label: "Technologies" },
];
