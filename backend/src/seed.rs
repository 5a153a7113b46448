//! Default portfolio content and admin account, written by the `seed` binary.

use common::{Achievement, Content, Education, Experience, ListOrder, Project, Skill};

use crate::{
    auth::hash_password,
    error::AppError,
    store::{Store, StoreError},
};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "password123";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub experience: usize,
    pub education: usize,
    pub skills: usize,
    pub achievements: usize,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    title: &str,
    description: &str,
    tags: &[&str],
    code_link: &str,
    demo_link: &str,
    icons: &[&str],
    gradient: &str,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        tags: strings(tags),
        code_link: code_link.to_string(),
        demo_link: demo_link.to_string(),
        icons: strings(icons),
        gradient: gradient.to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "MediSlot",
            "A comprehensive doctor appointment booking platform designed for seamless healthcare access. Features secure user authentication, real-time slot availability, and an integrated Razorpay payment gateway for hassle-free online consultations and payments.",
            &["React", "Node.js", "MongoDB", "Razorpay"],
            "https://github.com/Patilomkar282/MediSlot",
            "https://docappoint-sable.vercel.app/",
            &["FaReact", "FaNodeJs", "SiMongodb", "SiRazorpay"],
            "from-blue-500/10 to-cyan-500/10",
        ),
        project(
            "AutoCorrection System",
            "An intelligent CNC correction system featuring user, manager, and admin roles. Built with React.js & Tailwind for the frontend and Node.js/Express for RESTful APIs. Logs are stored in MySQL with secure JWT auth. Integrated with Raspberry Pi for real-time edge deployment and Chart.js for data visualization.",
            &["React", "Node.js", "MySQL", "Raspberry Pi"],
            "#",
            "#",
            &["FaReact", "FaNodeJs", "SiMysql", "FaRaspberryPi", "SiChartdotjs"],
            "from-green-500/10 to-emerald-500/10",
        ),
        project(
            "UnikLeads",
            "A robust SaaS platform designed for enterprise access control with a scalable multi-tenant architecture. Leverages AWS for cloud infrastructure, MySQL for structured data management, and React/Redux for complex state handling across different user roles.",
            &["AWS", "MySQL", "React", "Redux"],
            "https://github.com/UnikLeadsDev/SaaS-Base-Automated-Access-Control-with-Recharge-System",
            "http://34.227.47.231/login",
            &["FaAws", "SiMysql", "FaReact", "SiRedux"],
            "from-orange-500/10 to-yellow-500/10",
        ),
        project(
            "Blog-Connect",
            "A dynamic blog management platform empowering users to create, share, and manage articles. Features a high-performance Node.js/Express backend and an engaging React.js frontend that ensures smooth, real-time updates and a rich user experience.",
            &["React", "Node.js", "Express", "MongoDB"],
            "#",
            "#",
            &["FaReact", "FaNodeJs", "SiExpress", "SiMongodb"],
            "from-pink-500/10 to-rose-500/10",
        ),
        project(
            "Inventory Management",
            "A full-stack inventory tracking system ensuring real-time database updates and efficient stock management. Powered by a PHP backend for robust logic and a responsive HTML/CSS/JS frontend for superior usability across devices.",
            &["HTML/CSS", "PHP", "MySQL", "JS"],
            "#",
            "#",
            &["FaHtml5", "FaPhp", "SiMysql", "FaJs"],
            "from-indigo-500/10 to-violet-500/10",
        ),
        project(
            "Skillora",
            "An AI-powered learning assistant that curates personalized educational content. Integrates advanced LLMs for intelligent recommendations and the YouTube API to fetch relevant video resources, creating a tailored learning path for every user.",
            &["React", "AI/ML", "YouTube API"],
            "https://github.com/Patilomkar282/Devclash_Frontend",
            "#",
            &["FaReact", "FaPython", "SiYoutube"],
            "from-red-500/10 to-rose-500/10",
        ),
        project(
            "Portfolio",
            "The website you're looking at! A Single Page Application offering a high-performance, immersive experience. Features a custom light theme, 3D tilt interactions, Framer Motion animations, and an email backend.",
            &["React", "Framer Motion", "Tailwind"],
            "#",
            "#",
            &["FaReact", "SiFramer", "SiTailwindcss"],
            "from-purple-500/10 to-indigo-500/10",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn experience(
    title: &str,
    company: &str,
    period: &str,
    location: &str,
    description: &str,
    skills: &[&str],
    icon: &str,
    gradient: &str,
    icon_color: &str,
) -> Experience {
    Experience {
        title: title.to_string(),
        company: company.to_string(),
        period: period.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        skills: strings(skills),
        icon: icon.to_string(),
        gradient: gradient.to_string(),
        icon_color: icon_color.to_string(),
        certificate_link: None,
    }
}

pub fn experiences() -> Vec<Experience> {
    vec![
        experience(
            "MERN Stack Developer Intern",
            "Nexrage",
            "Aug 2025 – Present",
            "Remote",
            "Architecting scalable web solutions using the MERN stack. Focusing on performance optimization, component reusability, and implementing modern React patterns.",
            &["React", "Node.js", "Redux", "MongoDB"],
            "Laptop",
            "from-blue-500/10 to-indigo-500/10",
            "text-blue-600",
        ),
        experience(
            "Full Stack Intern",
            "Athena Automation",
            "Dec 2024 – Feb 2025",
            "Hybrid (Pune)",
            "Developed automated workflows and integrated third-party APIs for seamless data synchronization. Enhanced system reliability by 20% through rigorous testing.",
            &["MySQL", "Express", "API Integration", "Node.js"],
            "Database",
            "from-purple-500/10 to-violet-500/10",
            "text-purple-600",
        ),
        experience(
            "Software Development Intern",
            "Educadd Software",
            "June 2022 – Aug 2022",
            "Latur",
            "Assisted in the development of educational software modules. Gained hands-on experience with version control (Git) and agile development methodologies.",
            &["Java", "SQL", "Git", "OOPs"],
            "Layout",
            "from-orange-500/10 to-amber-500/10",
            "text-orange-600",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn education_entry(
    degree: &str,
    institute: &str,
    location: &str,
    year: &str,
    score: &str,
    description: &str,
    icon: &str,
    gradient: &str,
    icon_color: &str,
) -> Education {
    Education {
        degree: degree.to_string(),
        institute: institute.to_string(),
        location: location.to_string(),
        year: year.to_string(),
        score: score.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        gradient: gradient.to_string(),
        icon_color: icon_color.to_string(),
    }
}

pub fn education() -> Vec<Education> {
    vec![
        education_entry(
            "B.E in Computer Engineering",
            "Marathwada Mitra Mandal’s College of Engineering",
            "Karvenagar, Pune",
            "2026",
            "9.60 CGPA",
            "Focusing on core computer science concepts, rigorous academic curriculum, and advanced technical skills.",
            "GraduationCap",
            "from-blue-500/10 to-cyan-500/10",
            "text-blue-500",
        ),
        education_entry(
            "Diploma in Computer Science",
            "Puranmal Lahoti Government Polytechnic",
            "Latur",
            "2023",
            "88.11%",
            "Built a strong foundation in programming, algorithms, and system architecture with hands-on labs.",
            "BookOpen",
            "from-purple-500/10 to-pink-500/10",
            "text-purple-500",
        ),
        education_entry(
            "Senior Secondary (HSC)",
            "Dayanand Science College",
            "Latur",
            "2021",
            "96.67%",
            "Excelled in Science and Mathematics streams, developing strong analytical and problem-solving abilities.",
            "Award",
            "from-amber-500/10 to-orange-500/10",
            "text-amber-500",
        ),
        education_entry(
            "Secondary (SSC)",
            "Shri Mahatma Bashweshwar Vidyalaya",
            "Omerga",
            "2019",
            "92.80%",
            "Achieved academic excellence and actively participated in extra-curricular activities.",
            "SchoolIcon",
            "from-emerald-500/10 to-green-500/10",
            "text-emerald-500",
        ),
    ]
}

pub fn skills() -> Vec<Skill> {
    [
        ("React", "FaReact", "Frontend"),
        ("Node.js", "FaNodeJs", "Backend"),
        ("MongoDB", "SiMongodb", "Database"),
        ("Express", "SiExpress", "Backend"),
        ("JavaScript", "FaJs", "Language"),
        ("Java", "FaJava", "Language"),
        ("Python", "FaPython", "Language"),
        ("Tailwind", "SiTailwindcss", "Frontend"),
        ("Redux", "SiRedux", "State"),
        ("MySQL", "SiMysql", "Database"),
        ("HTML5", "FaHtml5", "Frontend"),
        ("CSS3", "FaCss3", "Frontend"),
        ("AWS", "FaAws", "Cloud"),
        ("Framer", "SiFramer", "Design"),
    ]
    .into_iter()
    .map(|(name, icon, category)| Skill {
        name: name.to_string(),
        category: category.to_string(),
        icon: icon.to_string(),
        color: None,
    })
    .collect()
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            title: "Winner - DevClash Hackathon 2025".to_string(),
            description: "First place in competitive programming and development hackathon"
                .to_string(),
            organization: None,
            category: "Competition".to_string(),
            icon: "Award".to_string(),
            color: "primary".to_string(),
            certificate_link: None,
        },
        Achievement {
            title: "Cyber Security Bootcamp".to_string(),
            description: "Comprehensive training in cybersecurity fundamentals and practices"
                .to_string(),
            organization: Some("COEP, 2025".to_string()),
            category: "Certification".to_string(),
            icon: "Award".to_string(),
            color: "secondary".to_string(),
            certificate_link: None,
        },
        Achievement {
            title: "MongoDB University Certification".to_string(),
            description: "Advanced database management and MongoDB development certification"
                .to_string(),
            organization: Some("MongoDB, 2025".to_string()),
            category: "Certification".to_string(),
            icon: "Award".to_string(),
            color: "primary".to_string(),
            certificate_link: None,
        },
    ]
}

/// Swaps the collection's records for `records`, which must be in display order.
async fn replace_all<T: Content>(store: &Store, mut records: Vec<T>) -> Result<usize, StoreError> {
    let removed = store.clear::<T>().await?;
    tracing::info!("Cleared {} existing {}", removed, T::COLLECTION);

    // Newest-first lists show the last insert on top.
    if T::ORDER == ListOrder::NewestFirst {
        records.reverse();
    }

    let count = records.len();
    for record in records {
        store.insert(record).await?;
    }
    tracing::info!("Inserted {} {}", count, T::COLLECTION);
    Ok(count)
}

/// Replaces all content and admins with the defaults plus one admin account.
pub async fn seed_database(
    store: &Store,
    admin_username: &str,
    admin_password: &str,
) -> Result<SeedSummary, AppError> {
    let summary = SeedSummary {
        projects: replace_all(store, projects()).await?,
        experience: replace_all(store, experiences()).await?,
        education: replace_all(store, education()).await?,
        skills: replace_all(store, skills()).await?,
        achievements: replace_all(store, achievements()).await?,
    };

    store.clear_admins().await?;
    let password_hash = hash_password(admin_password)?;
    store.insert_admin(admin_username, &password_hash).await?;
    tracing::info!("Default admin created: {}", admin_username);

    Ok(summary)
}
