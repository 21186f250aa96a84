//! Authored portfolio pages, one function per echo command

use chrono::{Datelike, NaiveDate};

use super::ContentBlock;
use crate::models::StatRecord;

/// Whole years elapsed between `since` and `today`
pub fn years_between(since: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - since.year();
    if (today.month(), today.day()) < (since.month(), since.day()) {
        years -= 1;
    }
    years
}

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1997, 2, 15).unwrap_or_default()
}

fn first_login() -> NaiveDate {
    NaiveDate::from_ymd_opt(2004, 2, 1).unwrap_or_default()
}

pub fn help() -> ContentBlock {
    ["cv", "whoami", "experience", "skills", "projects", "github", "homelab", "contact", "ls -la", "clear"]
        .iter()
        .fold(ContentBlock::new(), |block, name| {
            block.bullet(&format!("**{}**", name))
        })
}

pub fn whoami(today: NaiveDate) -> ContentBlock {
    let age = years_between(birth_date(), today);
    ContentBlock::new()
        .paragraph(&format!(
            "So, let's start with the basics. I'm [[Tomasz Toczek]], a {} year old \
             [[Test Engineer]] based in Gdańsk 🌊, Poland. I've built a career focusing on \
             test automation, end-to-end testing, and IT infrastructure support, backed by a \
             solid foundation in system administration and hardware. My journey into IT \
             wasn't straightforward: I transitioned from a career in sales, where I worked as \
             a representative and manager. Looking back, I often think I should've made the \
             switch to IT earlier, but I'm glad I finally did!",
            age
        ))
        .blank()
        .paragraph(
            "I'm self-taught and passionate about learning, having transitioned into software \
             testing where I specialize in tools like Playwright and JavaScript. Problem-solving \
             is my strong suit, and I thrive when tackling new challenges, especially in \
             unfamiliar tech spaces.",
        )
        .blank()
        .paragraph(
            "When I'm not working, you'll likely find me tinkering with various environments \
             and automation setups in my home lab. I've repurposed old desktops into a personal \
             playground where I experiment with different technologies and solutions.",
        )
        .blank()
        .paragraph(
            "Beyond tech, I'm also passionate about cars (mostly those rusty and weird ones). \
             And of course, I also unwind by playing some games (I've been playing Old School \
             **RuneScape** for way too long, never quit just taking breaks).",
        )
        .blank()
        .paragraph(
            "I'm always open to exploring new opportunities and contributing my skills to \
             innovative projects. If you're interested in collaborating or just want to chat, \
             feel free to reach out!",
        )
}

pub fn projects() -> ContentBlock {
    ContentBlock::new()
        .paragraph(
            "All of these projects were made to help me learn by doing. I don't treat them as \
             profit-driven ventures; they are purely for personal growth and experimentation. \
             Every new iteration is better than the older one! QA-related projects are \
             under way for sure.",
        )
        .blank()
        .paragraph("[**Interactive terminal portfolio**](https://github.com/toczke/react-portfolio)")
        .paragraph(
            "My resume may be AI-proof, but it looks boring. So I created this interactive \
             portfolio to showcase my skills in a more dynamic and engaging way.",
        )
        .field("Stack", "React, TypeScript, Docker")
        .blank()
        .paragraph("[**Time Register**](https://github.com/toczke/time-register)")
        .paragraph(
            "A tool for managing and tracking employee time entries, including vacation and \
             leave approvals, user roles and team management. It is built as microservices so \
             each component can be updated, maintained and scaled independently.",
        )
        .field("Backend", "JavaScript, Express")
        .field("Frontend", "Still a work in progress, can't decide what to use yet.")
        .field("DB", "MariaDB")
        .field("Platform", "Docker (for now)")
        .blank()
        .paragraph("[**Time Register Documentation**](https://github.com/toczke/time-register-documentation)")
        .paragraph("Redocly API documentation for users once the app goes live.")
        .blank()
        .paragraph("[**HAppka (WIP)**](https://github.com/toczke/happka)")
        .paragraph(
            "A frontend addon to Home Assistant to show the Żappsy count and a valid QR code \
             for scanning. Sharing is caring ❤️, so we use the same account within the house.",
        )
        .field("Stack", "Node.js backend on HACS")
        .blank()
        .paragraph("[**Aorus-B760M-Elite-X-AX-Hackintosh**](https://github.com/toczke/Aorus-B760M-Elite-X-AX-hackintosh)")
        .paragraph("Complete and stable EFI for my Hackintosh build.")
        .blank()
        .heading("Legacy Projects")
        .bullet("**HP8200NVMe** - BIOS mod for Ivy and Sandy Bridge HP desktops to add boot from NVMe SSD.")
        .bullet("[**toogoodtogo-bot**](https://github.com/toczke/toogoodtogo-bot) - Dockerized it.")
}

pub fn contact() -> ContentBlock {
    ContentBlock::new()
        .field("Email", "[toczektomasz@outlook.com](mailto:toczektomasz@outlook.com)")
        .field("LinkedIn", "[linkedin.com/in/toczek-tomasz](https://www.linkedin.com/in/toczek-tomasz/)")
        .field("Gadu-Gadu", "Yuck! There's no way that I'm gonna use that!")
}

pub fn github() -> ContentBlock {
    ContentBlock::new()
        .bullet("[GitHub](https://github.com/toczke) - Click on this fancy violet text to check my repos.")
}

pub fn skills() -> ContentBlock {
    ContentBlock::new()
        .heading("Programming Languages")
        .bullet("JavaScript / TypeScript")
        .heading("Tools and Frameworks")
        .bullet("Git (GitHub/GitLab)")
        .bullet("Docker")
        .bullet("Playwright")
        .bullet("SQL")
        .bullet("AWS")
        .bullet("Postman")
        .heading("Certificates & Courses")
        .bullet("ISTQB® Certified Tester Foundation Level")
        .bullet("CKA & CKAD")
        .heading("Professional Qualifications")
        .bullet("E.13 - Designing local computer networks and network administration")
        .bullet("E.15 - Commissioning and maintaining terminals and subscriber connections")
        .bullet("E.16 - Installation and maintenance of wide area networks")
        .bullet("**Profession:** ICT Technician (351103)")
}

pub fn homelab() -> ContentBlock {
    ContentBlock::new()
        .heading("Current Hardware")
        .field("Host", "HP EliteDesk 705 G4 DM 65W (DBXEnabled)")
        .field("Router", "Asus RT-AC65P (flashed with OpenWRT)")
        .field("OS", "Proxmox VE bookworm 8.3.4 x86_64")
        .field("CPU", "AMD Ryzen 3 PRO 2200G @ 3.50 GHz")
        .field("GPU", "AMD Radeon Vega 8 Graphics (Integrated)")
        .field("Memory", "32GiB")
        .heading("Router Services")
        .bullet("**ds-lite** - Dual-Stack Lite for IPv6 transition")
        .bullet("**tailscale** - Secure VPN and mesh networking")
        .bullet("**cloudflared** - Secure tunnel for remote access and DNS over HTTPS")
        .heading("Services in Use")
        .bullet("**Docker Containers:**")
        .nested_bullet(1, "[[This site!]] - I doubt it you won't believe it.")
        .nested_bullet(1, "**Crafty** - Minecraft server management tool.")
        .nested_bullet(1, "**Planning Poker** - Collaborative estimation for agile planning.")
        .nested_bullet(1, "**Prowlarr** - Indexer manager for TV shows and movies.")
        .nested_bullet(1, "**Flaresolverr** - Bypasses Cloudflare protection for automated tasks.")
        .nested_bullet(1, "**qBittorrent** - Open-source torrent client.")
        .nested_bullet(1, "**Radarr** - Automated movie management.")
        .nested_bullet(1, "**Sonarr** - Like Radarr, but for TV series.")
        .nested_bullet(1, "**Jellyseerr** - Media request manager for Jellyfin.")
        .nested_bullet(1, "**Bazarr** - Subtitle management for Sonarr and Radarr.")
        .nested_bullet(1, "**Jackett** - Connects torrent trackers to Radarr, Sonarr and friends.")
        .bullet("**Jellyfin** - Mom can we get Netflix at home? Netflix at home:")
        .bullet("**GitHub Actions Self-hosted Runner** - CI/CD integration")
        .bullet("**AdGuard Home** - Network-wide ad blocker")
        .bullet("**HomeAssistant** (with ESPHome, Z2M, and BLE) - Home automation")
}

pub fn experience() -> ContentBlock {
    ContentBlock::new()
        .heading("Work Experience")
        .bullet("**Associate QA Engineer** - Kainos for DVSA (10/2024 - Present)")
        .nested_bullet(1, "Implementing Playwright for mobile emulation and E2E testing on physical Android devices.")
        .nested_bullet(1, "Supporting the team in developing and executing automated end-to-end tests.")
        .nested_bullet(1, "Ensuring high-quality test environments for both emulation and real-device testing.")
        .nested_bullet(1, "Collaborating with developers to enhance test automation and coverage.")
        .nested_bullet(1, "Contributing to the overall test strategy and improving testing workflows.")
        .nested_bullet(1, "**Projects:**")
        .nested_bullet(
            2,
            "**DVSA: Images in Garages** - Image evidence within MOT garages to combat fraud and errors. \
             [Read more](https://mattersoftesting.blog.gov.uk/how-were-combating-fraud-and-error-within-the-mot/)",
        )
        .nested_bullet(2, "**DVSA: Trade-API** - Rewrite of the Java MOT History service to TypeScript with full API test coverage.")
        .nested_bullet(2, "**DVSA: FMTS** - Modernizing the MOT Testing System with improved automation, stability, and scalability.")
        .bullet("**Trainee QA Engineer** - Kainos for DVSA (06/2023 - 10/2024)")
        .nested_bullet(1, "Implemented test platforms and prepared test environments.")
        .nested_bullet(1, "Conducted manual API testing and analyzed results.")
        .nested_bullet(1, "Wrote Playwright E2E tests (TypeScript) and performance tests (Scala Gatling).")
        .nested_bullet(1, "Responded to user tickets and demoed solutions to stakeholders.")
        .bullet("**LAB Support Technician** - ManpowerGroup for Intel (10/2021 - 06/2023)")
        .nested_bullet(1, "Led project support initiatives and provided technical assistance.")
        .nested_bullet(1, "Managed IT infrastructure, troubleshooting hardware and software issues.")
        .nested_bullet(1, "Coordinated system deployments, updates, and technical improvements.")
        .nested_bullet(1, "Prepared and maintained test environments, performed acceptance testing.")
        .nested_bullet(1, "**Projects:**")
        .nested_bullet(2, "**MTL-P & MTL-S** - Lead support for next-generation Intel platforms.")
        .bullet("**Area Sales Manager** - Liquider Poland (07/2020 - 09/2021)")
        .nested_bullet(1, "Managed a team of 20 and supported regional IT infrastructure.")
        .nested_bullet(1, "Led multiple Customer Representatives and Brand Ambassadors.")
}

/// Hiscore page with the fetched skill levels
pub fn runescape(today: NaiveDate, stats: &[StatRecord]) -> ContentBlock {
    let years = years_between(first_login(), today);
    let block = ContentBlock::new()
        .paragraph(&format!(
            "[[You must have been really bored if you tried that 🎉]], I've been a RuneScape \
             player for a little bit over {} years. Who would even believe that? In numbers:",
            years
        ))
        .bullet("7th account")
        .bullet("6 bans total (I'm not proud of them at all)")
        .bullet("My first [[Quest Cape]]")
        .paragraph("As you went sooo far, you can check my stats (btw they are fetched from highscores):");

    stats.iter().fold(block, |block, stat| {
        block.bullet(&format!(
            "**{}:** Level {} (XP: {})",
            stat.name,
            stat.level,
            group_thousands(stat.experience)
        ))
    })
}

/// Format an integer with `,` thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}
