//! Static portfolio data backing the digital-twin persona.
//!
//! The site's data tables, held as typed constants. Nothing here is loaded at
//! runtime; the persona module renders this into the system instruction.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    pub birth_date: String,
    pub birthplace: String,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact_email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub institution: String,
    pub period: String,
    pub degree: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0-100. Display only.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
}

impl Profile {
    /// The built-in profile the twin answers for.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            name: "Cerda Ryan, A.".into(),
            age: 24,
            birth_date: "August 11, 2001".into(),
            birthplace: "Pambujan".into(),
            summary: "Beginner web developer and BSIT graduate, eager to learn, improve, and grow \
                      in the field of web development. Committed to delivering high-quality work \
                      and ensuring client satisfaction."
                .into(),
            education: vec![
                Education {
                    institution: "Colegio De Montalban".into(),
                    period: "2021-2025 (Graduate)".into(),
                    degree: "Bachelor of Science in Information Technology (BSIT)".into(),
                },
                Education {
                    institution: "Pambujan National High School (PNHS)".into(),
                    period: "2019-2020".into(),
                    degree: "Information and Computer Technology (ICT)".into(),
                },
            ],
            experience: vec![
                Experience {
                    role: "3 Months OJT".into(),
                    company: "Point link IT Solutions INC.".into(),
                    period: "Internship".into(),
                },
                Experience {
                    role: "Back Office".into(),
                    company: "Contractual Service".into(),
                    period: "1 Month Contract".into(),
                },
                Experience { role: "Catering".into(), company: "Waiter, Barista".into(), period: "Part-time".into() },
            ],
            skills: vec![
                Skill { name: "UI Design (Figma)".into(), level: 90 },
                Skill { name: "Mobile App Design".into(), level: 85 },
                Skill { name: "Computer Networking".into(), level: 80 },
                Skill { name: "Frontend Architecture".into(), level: 75 },
                Skill { name: "Technical Support".into(), level: 85 },
            ],
            projects: vec![
                Project {
                    title: "Medicare Portal".into(),
                    description: "Healthcare management system for seamless patient-doctor \
                                  interactions and medical record tracking."
                        .into(),
                    tags: vec!["React".into(), "Healthcare".into(), "Management".into()],
                    link: "https://medicare-neon-seven.vercel.app/".into(),
                },
                Project {
                    title: "Inventory Master".into(),
                    description: "Inventory and sales tracking portal with real-time stock \
                                  alerts, supplier management, and automated reporting."
                        .into(),
                    tags: vec!["React".into(), "Node.js".into(), "Database".into()],
                    link: "https://github.com/ryan-dev-gi".into(),
                },
                Project {
                    title: "Student Nexus".into(),
                    description: "School management portal for student performance, attendance, \
                                  and faculty scheduling."
                        .into(),
                    tags: vec!["Next.js".into(), "Education".into(), "Auth".into()],
                    link: "https://github.com/ryan-dev-gi".into(),
                },
                Project {
                    title: "TechHub E-Store".into(),
                    description: "Full-stack e-commerce solution for hardware retailers with \
                                  product filtering and order management."
                        .into(),
                    tags: vec!["React".into(), "E-commerce".into(), "Tailwind".into()],
                    link: "https://github.com/ryan-dev-gi".into(),
                },
            ],
            contact_email: "cerdaryan276@gmail.com".into(),
        }
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
