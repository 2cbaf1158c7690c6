//! Portfolio dataset shown by the content commands.
//!
//! The dataset is read-only configuration: a built-in sample is used unless the
//! config points at a JSON file or carries an inline `portfolio` object.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Resume preview data and export source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeInfo {
    pub years_experience: String,
    pub skills_summary: String,
    /// Static PDF to hand out instead of the generated text resume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_path: Option<PathBuf>,
    /// File name used for the exported copy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: String,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Job>,
    pub contact: ContactInfo,
    pub resume: ResumeInfo,
}

impl Portfolio {
    /// Load a portfolio dataset from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const SAMPLE_ABOUT: &str = "\
Welcome to my terminal portfolio! I'm a passionate full-stack developer with 5+ years of experience
building scalable web applications and innovative software solutions.

I specialize in modern web technologies and have a strong background in both frontend and backend
development. My expertise includes creating responsive user interfaces, designing robust APIs,
and implementing efficient database solutions.

When I'm not coding, you can find me contributing to open-source projects, writing technical
blogs, or exploring the latest trends in software development. I'm always eager to learn new
technologies and take on challenging projects that push the boundaries of what's possible.

Let's connect and build something amazing together!";

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Alex Morgan".to_string(),
                title: "Full-Stack Developer".to_string(),
                tagline: "Passionate about creating amazing digital experiences".to_string(),
            },
            about: SAMPLE_ABOUT.to_string(),
            skills: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    items: strings(&["TypeScript", "JavaScript", "Python", "Go", "Java", "C++"]),
                },
                SkillGroup {
                    category: "Frontend".to_string(),
                    items: strings(&[
                        "React",
                        "Next.js",
                        "Vue.js",
                        "Tailwind CSS",
                        "Framer Motion",
                        "Three.js",
                    ]),
                },
                SkillGroup {
                    category: "Backend".to_string(),
                    items: strings(&[
                        "Node.js",
                        "Express.js",
                        "FastAPI",
                        "NestJS",
                        "GraphQL",
                        "REST APIs",
                    ]),
                },
                SkillGroup {
                    category: "Databases".to_string(),
                    items: strings(&["PostgreSQL", "MongoDB", "Redis", "MySQL", "Prisma", "TypeORM"]),
                },
                SkillGroup {
                    category: "DevOps & Tools".to_string(),
                    items: strings(&["Docker", "Kubernetes", "AWS", "Vercel", "Git", "CI/CD", "Linux"]),
                },
                SkillGroup {
                    category: "Mobile".to_string(),
                    items: strings(&["React Native", "Flutter", "Expo", "iOS", "Android"]),
                },
            ],
            projects: vec![
                Project {
                    id: "ecommerce-platform".to_string(),
                    title: "E-Commerce Platform".to_string(),
                    description: "Full-stack e-commerce solution with real-time inventory management, payment processing, and admin dashboard. Built with microservices architecture and deployed on AWS.".to_string(),
                    tech_stack: strings(&["Next.js", "Node.js", "PostgreSQL", "Redis", "Docker", "AWS"]),
                    github_url: Some("https://github.com/username/ecommerce-platform".to_string()),
                    live_url: Some("https://ecommerce-demo.vercel.app".to_string()),
                    featured: true,
                },
                Project {
                    id: "ai-chatbot".to_string(),
                    title: "AI-Powered Chatbot".to_string(),
                    description: "Intelligent chatbot with natural language processing capabilities, context awareness, and multi-language support. Integrated with OpenAI GPT-4 API.".to_string(),
                    tech_stack: strings(&["React", "Python", "FastAPI", "OpenAI API", "MongoDB", "WebSocket"]),
                    github_url: Some("https://github.com/username/ai-chatbot".to_string()),
                    live_url: Some("https://ai-chatbot-demo.vercel.app".to_string()),
                    featured: true,
                },
                Project {
                    id: "task-manager".to_string(),
                    title: "Task Management System".to_string(),
                    description: "Collaborative task management tool with real-time updates, team collaboration features, and advanced filtering capabilities.".to_string(),
                    tech_stack: strings(&["Vue.js", "Express.js", "Socket.io", "MySQL", "JWT"]),
                    github_url: Some("https://github.com/username/task-manager".to_string()),
                    live_url: Some("https://task-manager-demo.vercel.app".to_string()),
                    featured: false,
                },
                Project {
                    id: "weather-app".to_string(),
                    title: "Weather Dashboard".to_string(),
                    description: "Real-time weather application with location-based forecasts, interactive maps, and historical data visualization.".to_string(),
                    tech_stack: strings(&["React", "TypeScript", "Chart.js", "OpenWeather API", "PWA"]),
                    github_url: Some("https://github.com/username/weather-dashboard".to_string()),
                    live_url: Some("https://weather-dashboard-demo.vercel.app".to_string()),
                    featured: false,
                },
            ],
            experience: vec![
                Job {
                    id: "cloudscale".to_string(),
                    position: "Senior Full-Stack Engineer".to_string(),
                    company: "CloudScale Labs".to_string(),
                    location: "Remote".to_string(),
                    start_date: "Jan 2023".to_string(),
                    end_date: "Present".to_string(),
                    current: true,
                    description: strings(&[
                        "Lead development of a multi-tenant analytics dashboard used by 200+ customers",
                        "Designed GraphQL APIs and migrated legacy REST endpoints",
                        "Mentored four engineers and introduced a code review guild",
                    ]),
                    technologies: strings(&["Next.js", "TypeScript", "GraphQL", "PostgreSQL", "AWS"]),
                },
                Job {
                    id: "brightpixel".to_string(),
                    position: "Full-Stack Developer".to_string(),
                    company: "BrightPixel Studio".to_string(),
                    location: "Berlin, Germany".to_string(),
                    start_date: "Mar 2020".to_string(),
                    end_date: "Dec 2022".to_string(),
                    current: false,
                    description: strings(&[
                        "Built e-commerce storefronts and headless CMS integrations for retail clients",
                        "Cut page load times by 40% through caching and image optimization",
                        "Owned CI/CD pipelines and Docker-based preview environments",
                    ]),
                    technologies: strings(&["React", "Node.js", "Redis", "Docker", "MongoDB"]),
                },
                Job {
                    id: "startup-intern".to_string(),
                    position: "Software Engineering Intern".to_string(),
                    company: "Launchpad Ventures".to_string(),
                    location: "Lisbon, Portugal".to_string(),
                    start_date: "Jun 2019".to_string(),
                    end_date: "Feb 2020".to_string(),
                    current: false,
                    description: strings(&[
                        "Prototyped internal tooling for portfolio company reporting",
                        "Wrote data import scripts and automated weekly reports",
                    ]),
                    technologies: strings(&["Python", "FastAPI", "MySQL"]),
                },
            ],
            contact: ContactInfo {
                email: "developer@example.com".to_string(),
                github: "https://github.com/username".to_string(),
                linkedin: "https://linkedin.com/in/username".to_string(),
                twitter: Some("https://twitter.com/username".to_string()),
            },
            resume: ResumeInfo {
                years_experience: "5+ years".to_string(),
                skills_summary: "TypeScript, React, Node.js, Python, AWS, and more".to_string(),
                pdf_path: None,
                file_name: None,
            },
        }
    }
}
