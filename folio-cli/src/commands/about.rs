use anyhow::Result;

use super::Session;

pub fn run_about(session: &Session) -> Result<()> {
    let portfolio = &session.portfolio;
    let profile = &portfolio.profile;

    println!("{}", profile.name);
    if !profile.title.is_empty() {
        println!("{}", profile.title);
    }
    if !profile.tagline.is_empty() {
        println!("\n{}", profile.tagline);
    }
    if !profile.bio.is_empty() {
        println!("\n{}", profile.bio);
    }

    if let Some(edu) = &portfolio.education {
        println!("\nEducation");
        println!("  {} ({})", edu.university, edu.period);
        match &edu.gpa {
            Some(gpa) => println!("  {}, GPA {}", edu.degree, gpa),
            None => println!("  {}", edu.degree),
        }
    }

    if !portfolio.experience.is_empty() {
        println!("\nExperience");
        for job in &portfolio.experience {
            println!("  {} @ {} ({})", job.title, job.company, job.period);
            for highlight in &job.highlights {
                println!("    - {highlight}");
            }
        }
    }

    let groups = portfolio.skills.groups();
    if !groups.is_empty() {
        println!("\nSkills");
        for (label, items) in groups {
            println!("  {:<18} {}", format!("{label}:"), items.join(", "));
        }
    }

    if !profile.email.is_empty() {
        println!("\n{}", profile.email);
    }
    for link in [&profile.github, &profile.linkedin].into_iter().flatten() {
        println!("{link}");
    }
    Ok(())
}
