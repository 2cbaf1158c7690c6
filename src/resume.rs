//! Resume export: copy the configured PDF or write a generated text resume.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::portfolio::Portfolio;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Resume PDF not found: {}", .0.display())]
    MissingPdf(PathBuf),
    #[error("IO error writing resume: {0}")]
    Io(#[from] std::io::Error),
}

/// Where exported files go: config override, the user's download folder, or the cwd.
pub fn download_dir(config: &Config) -> PathBuf {
    config
        .download_dir
        .clone()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Exported file name, e.g. `Alex_Morgan_Resume.pdf`
pub fn export_file_name(portfolio: &Portfolio) -> String {
    if let Some(name) = &portfolio.resume.file_name {
        return name.clone();
    }
    let ext = if portfolio.resume.pdf_path.is_some() {
        "pdf"
    } else {
        "txt"
    };
    let stem: String = portfolio
        .profile
        .name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        format!("Resume.{ext}")
    } else {
        format!("{stem}_Resume.{ext}")
    }
}

pub fn render_text_resume(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let profile = &portfolio.profile;
    let rule = "=".repeat(72);

    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "{}", profile.title);
    let _ = writeln!(out, "{rule}");

    let contact = &portfolio.contact;
    let _ = writeln!(out, "Email:    {}", contact.email);
    let _ = writeln!(out, "GitHub:   {}", contact.github);
    let _ = writeln!(out, "LinkedIn: {}", contact.linkedin);
    if let Some(twitter) = &contact.twitter {
        let _ = writeln!(out, "Twitter:  {twitter}");
    }

    section(&mut out, "SUMMARY");
    let _ = writeln!(out, "{}", portfolio.about.trim());

    section(&mut out, "SKILLS");
    for group in &portfolio.skills {
        let _ = writeln!(out, "{}: {}", group.category, group.items.join(", "));
    }

    if !portfolio.experience.is_empty() {
        section(&mut out, "EXPERIENCE");
        for job in &portfolio.experience {
            let _ = writeln!(
                out,
                "{} - {}, {} ({} - {})",
                job.position, job.company, job.location, job.start_date, job.end_date
            );
            for line in &job.description {
                let _ = writeln!(out, "  * {line}");
            }
            if !job.technologies.is_empty() {
                let _ = writeln!(out, "  Tech: {}", job.technologies.join(", "));
            }
            out.push('\n');
        }
    }

    section(&mut out, "PROJECTS");
    let mut projects: Vec<_> = portfolio.featured_projects().collect();
    if projects.is_empty() {
        projects = portfolio.projects.iter().collect();
    }
    for project in projects {
        let _ = writeln!(out, "{}", project.title);
        let _ = writeln!(out, "  {}", project.description);
        let _ = writeln!(out, "  Tech: {}", project.tech_stack.join(", "));
        if let Some(url) = &project.github_url {
            let _ = writeln!(out, "  Code: {url}");
        }
        if let Some(url) = &project.live_url {
            let _ = writeln!(out, "  Live: {url}");
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.len()));
}

/// Write the resume into `dir` and return the file's path.
pub fn export_resume(portfolio: &Portfolio, dir: &Path) -> Result<PathBuf, ResumeError> {
    fs::create_dir_all(dir)?;
    let target = dir.join(export_file_name(portfolio));

    match &portfolio.resume.pdf_path {
        Some(pdf) => {
            if !pdf.exists() {
                return Err(ResumeError::MissingPdf(pdf.clone()));
            }
            fs::copy(pdf, &target)?;
        }
        None => fs::write(&target, render_text_resume(portfolio))?,
    }

    tracing::info!(path = %target.display(), "resume exported");
    Ok(target)
}
