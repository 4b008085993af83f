// Fixed text used when the analyzer synthesizes content rather than extracting it.
// Archetypes, education candidates, placeholder contacts and advice sentences live here.

use crate::models::analysis::ExperienceEntry;

// ────────────────────────────────────────────────────────────────────────────
// Placeholder contact data
// ────────────────────────────────────────────────────────────────────────────

pub const FIRST_NAMES: &[&str] = &[
    "Rahul", "Priya", "Amit", "Sneha", "Vikram", "Anita", "Rajesh", "Kavya",
];

pub const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Singh", "Kumar", "Gupta", "Agarwal", "Jain", "Shah",
];

pub const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com", "company.com"];

pub const FALLBACK_PHONE: &str = "+91 98765 43210";

// ────────────────────────────────────────────────────────────────────────────
// Experience archetypes
// ────────────────────────────────────────────────────────────────────────────

pub struct Archetype {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

impl Archetype {
    pub fn to_entry(&self) -> ExperienceEntry {
        ExperienceEntry {
            company: self.company.to_string(),
            role: self.role.to_string(),
            duration: self.duration.to_string(),
            description: self.description.to_string(),
        }
    }
}

pub const SENIOR_ARCHETYPE: Archetype = Archetype {
    company: "TechCorp Solutions",
    role: "Senior Software Engineer",
    duration: "2022 - Present",
    description: "Led development of scalable web applications using modern technologies. \
        Mentored junior developers and improved system performance by 40%.",
};

pub const FULL_STACK_ARCHETYPE: Archetype = Archetype {
    company: "Digital Innovations Ltd",
    role: "Full Stack Developer",
    duration: "2020 - 2022",
    description: "Developed and maintained web applications using React, Node.js, and MongoDB. \
        Collaborated with cross-functional teams to deliver high-quality software solutions.",
};

pub const INTERN_ARCHETYPE: Archetype = Archetype {
    company: "StartupXYZ",
    role: "Software Development Intern",
    duration: "2019 - 2020",
    description: "Assisted in frontend development and learned industry best practices. \
        Contributed to multiple projects and gained hands-on experience with modern web technologies.",
};

// ────────────────────────────────────────────────────────────────────────────
// Education candidates
// ────────────────────────────────────────────────────────────────────────────

pub const DEGREES: &[&str] = &[
    "Bachelor of Technology",
    "Master of Computer Applications",
    "Bachelor of Engineering",
    "Master of Technology",
];

pub const INSTITUTES: &[&str] = &[
    "Indian Institute of Technology",
    "National Institute of Technology",
    "Delhi University",
    "Mumbai University",
];

pub const GRADUATION_YEAR: &str = "2020";

// ────────────────────────────────────────────────────────────────────────────
// Recommendation sentences
// ────────────────────────────────────────────────────────────────────────────

pub const LOW_SCORE_ADVICE: &[&str] = &[
    "Add a professional summary at the top highlighting your key strengths and career objectives.",
    "Include more quantifiable achievements with specific numbers, percentages, or dollar amounts.",
];

pub const MODERATE_SCORE_ADVICE: &[&str] = &[
    "Expand your skills section with both technical and soft skills relevant to your target roles.",
    "Add more detailed descriptions of your accomplishments in each role, focusing on impact and results.",
];

pub const MISSING_SUMMARY_ADVICE: &str =
    "Add a compelling professional summary that showcases your unique value proposition.";

pub const FEW_SKILLS_ADVICE: &str =
    "Include more relevant technical skills and tools you've worked with to improve keyword matching.";

pub const MISSING_PROJECTS_ADVICE: &str =
    "Add a projects section showcasing your practical work, including personal or open-source projects.";

pub const MISSING_LEARNING_ADVICE: &str =
    "Consider adding relevant certifications or online courses to demonstrate continuous learning.";

pub const GENERAL_ADVICE: &[&str] = &[
    "Use strong action verbs (developed, implemented, optimized) to describe your achievements.",
    "Tailor your resume for each application by emphasizing skills mentioned in the job description.",
    "Ensure consistent formatting, proper grammar, and professional presentation throughout.",
];

/// Separator between advice paragraphs in the rendered recommendation text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";
