//! Hardcoded portfolio content.
//!
//! Every list here is a `'static` constant; the section components render
//! them in order and key each item by [`Keyed::key`].

pub const OWNER_NAME: &str = "SaiGanesh Ponnaganti";
pub const OWNER_TITLE: &str = "Full-Stack Web Developer";
pub const BRAND: &str = "PSG";
pub const HERO_IMAGE: &str = "/images/panter-psg2.png";

pub const ABOUT: [&str; 2] = [
    "I'm a passionate Full-Stack Web Developer with a keen interest in creating innovative solutions. Currently pursuing my B.Tech in Computer Science and Engineering at Narasaraopet Engineering College, I bring a blend of theoretical knowledge and practical skills to every project.",
    "My expertise spans across various technologies, and I'm always eager to learn and adapt to new challenges. With a strong foundation in both front-end and back-end development, I strive to create seamless, user-friendly applications that solve real-world problems.",
];

/// Anchor targets shown in the navbar, in display order.
pub const NAV_ITEMS: [&str; 6] = [
    "About",
    "Skills",
    "Projects",
    "Experience",
    "Education",
    "Contact",
];

/// Stable identity for rendered list items.
pub trait Keyed {
    fn key(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub tech: &'static str,
}

impl Keyed for Project {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100.
    pub level: u8,
}

impl Keyed for Skill {
    fn key(&self) -> String {
        self.name.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
}

impl Keyed for Experience {
    fn key(&self) -> String {
        self.company.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

impl Keyed for Education {
    fn key(&self) -> String {
        self.institution.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "PBK ARTS",
        description: "Responsive website for my incredibly talented brother",
        image: "/images/car-figma.png",
        category: "Web Development",
        tech: "Vite.js, React.js, Tailwind CSS",
    },
    Project {
        id: 2,
        title: "STAY GOLD REAL-ESTATE",
        description: "Digital helper for renting rooms",
        image: "/images/car-figma.png",
        category: "Full-Stack Development",
        tech: "Angular, Oracle DB, Node.js, Express.js",
    },
    Project {
        id: 3,
        title: "PLUG AND POWER",
        description: "Innovative plug-and-play power solutions for roads",
        image: "/images/car-figma.png",
        category: "IoT & Web Development",
        tech: "Python, Flask, IBM Db2, Docker",
    },
    Project {
        id: 4,
        title: "BLOOD BANK PROJECT",
        description: "Platform connecting blood donors with those in need",
        image: "/images/car-figma.png",
        category: "Web Development",
        tech: "Python, HTML5, CSS, JavaScript, XAMPP",
    },
];

pub const SKILLS: [Skill; 6] = [
    Skill { name: "Python", level: 90 },
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "React", level: 80 },
    Skill { name: "Angular", level: 75 },
    Skill { name: "Node.js", level: 80 },
    Skill { name: "MongoDB", level: 70 },
];

pub const EXPERIENCES: [Experience; 3] = [
    Experience {
        role: "Machine Learning Intern",
        company: "SKILLDZIRE",
        period: "May 2024 – July 2024",
    },
    Experience {
        role: "Full-Stack Web Developer Intern",
        company: "SLASHMARK",
        period: "Nov 2023 – Feb 2024",
    },
    Experience {
        role: "Cyber Security Intern",
        company: "SUPRAJA TECHNOLOGIES",
        period: "Jun 2023 – Jul 2023",
    },
];

pub const EDUCATION: [Education; 3] = [
    Education {
        degree: "B.Tech in Computer Science and Engineering",
        institution: "Narasaraopet Engineering College",
        period: "2021 - 2025",
    },
    Education {
        degree: "Intermediate Education",
        institution: "Sri Chaitanya Junior College",
        period: "2019 - 2021",
    },
    Education {
        degree: "Secondary School Education",
        institution: "Bhashyam High School",
        period: "2018 - 2019",
    },
];

pub const CERTIFICATIONS: [&str; 3] = [
    "MongoDB Atlas Administrator Path - MongoDB",
    "Machine Learning with Python: A Practical Introduction - edX",
    "Enterprise Design Thinking Practitioner - IBM",
];

pub const AWARDS: [&str; 3] = [
    "1st Prize in Machine Learning Hackathon at Narasaraopet Engineering College",
    "1st Prize in Web Development Contest",
    "3rd Prize in Web Design competition at Jubilation 2K23",
];

pub const DEVELOPER_QUOTES: [&str; 5] = [
    "I don't create a website, I create an experience for users.",
    "Good code is its own best documentation.",
    "The web is a canvas, and code is my paint.",
    "Every line of code should appear to be written by a single person.",
    "Simplicity is the soul of efficiency.",
];

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: "github",
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: "linkedin",
    },
    SocialLink {
        label: "Email",
        href: "#",
        icon: "mail",
    },
    SocialLink {
        label: "Resume",
        href: "#",
        icon: "file-text",
    },
];

pub fn skill_names() -> Vec<&'static str> {
    SKILLS.iter().map(|s| s.name).collect()
}

pub fn company_names() -> Vec<&'static str> {
    EXPERIENCES.iter().map(|e| e.company).collect()
}

/// In-page anchor for a navbar entry, e.g. `"Skills"` -> `"#skills"`.
pub fn anchor_for(item: &str) -> String {
    format!("#{}", item.to_lowercase())
}
