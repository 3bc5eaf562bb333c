//! The fixed default post set seeded on first access.

use once_cell::sync::Lazy;
use time::macros::date;

use super::Post;

static DEFAULT_POSTS: Lazy<Vec<Post>> = Lazy::new(build_default_posts);

/// An owned copy of the default collection.
///
/// Served verbatim by detached stores and written to storage the first
/// time an attached store reads an empty backend.
pub fn default_posts() -> Vec<Post> {
    DEFAULT_POSTS.clone()
}

fn build_default_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "Understanding Zero-Day Vulnerabilities".to_string(),
            slug: "understanding-zero-day-vulnerabilities".to_string(),
            excerpt: "A deep dive into zero-day exploits, how they work, and strategies for protection against unknown threats.".to_string(),
            content: r#"# Understanding Zero-Day Vulnerabilities

A zero-day vulnerability is a security flaw in software that is unknown to the vendor. These vulnerabilities are particularly dangerous because there's no patch available when they're discovered by attackers.

## How Zero-Day Attacks Work

1. **Discovery**: An attacker finds an unknown vulnerability
2. **Exploitation**: They create an exploit before the vendor knows
3. **Attack**: The exploit is deployed against targets
4. **Detection**: Eventually the attack is discovered
5. **Patch**: The vendor releases a fix

## Protection Strategies

- Keep all software updated
- Use behavior-based detection systems
- Implement network segmentation
- Regular security audits
- Employee security training

```bash
# Example: Check for CVEs
nmap --script vuln target.com
```

Stay vigilant and always assume your systems could be targeted."#
                .to_string(),
            author: "Security Analyst".to_string(),
            date: date!(2024 - 12 - 10),
            tags: vec![
                "vulnerabilities".to_string(),
                "security".to_string(),
                "zero-day".to_string(),
            ],
            read_time: 5,
            cover_image: None,
        },
        Post {
            id: "2".to_string(),
            title: "Introduction to Penetration Testing".to_string(),
            slug: "introduction-to-penetration-testing".to_string(),
            excerpt: "Learn the fundamentals of ethical hacking and penetration testing methodologies.".to_string(),
            content: r#"# Introduction to Penetration Testing

Penetration testing, or pentesting, is a simulated cyber attack against your computer system to check for exploitable vulnerabilities.

## The Penetration Testing Phases

### 1. Reconnaissance
Gathering information about the target system.

```bash
# DNS enumeration
dig target.com ANY
```

### 2. Scanning
Identifying open ports and services.

```bash
# Port scanning with nmap
nmap -sV -sC target.com
```

### 3. Gaining Access
Exploiting discovered vulnerabilities.

### 4. Maintaining Access
Establishing persistent access for future testing.

### 5. Analysis & Reporting
Documenting findings and recommendations.

## Essential Tools

- **Nmap**: Network scanning
- **Burp Suite**: Web application testing
- **Metasploit**: Exploitation framework
- **Wireshark**: Network analysis

Remember: Only perform penetration testing with proper authorization!"#
                .to_string(),
            author: "Security Analyst".to_string(),
            date: date!(2024 - 12 - 08),
            tags: vec![
                "pentesting".to_string(),
                "ethical-hacking".to_string(),
                "security".to_string(),
            ],
            read_time: 7,
            cover_image: None,
        },
        Post {
            id: "3".to_string(),
            title: "Ransomware Defense Strategies".to_string(),
            slug: "ransomware-defense-strategies".to_string(),
            excerpt: "Comprehensive guide to protecting your organization from ransomware attacks.".to_string(),
            content: r#"# Ransomware Defense Strategies

Ransomware attacks continue to rise, causing billions in damages annually. Here's how to protect your organization.

## Prevention Measures

### Email Security
- Implement email filtering
- Train employees on phishing
- Use DMARC, DKIM, and SPF

### Backup Strategy
Follow the 3-2-1 rule:
- **3** copies of data
- **2** different media types
- **1** offsite backup

```bash
# Example backup verification
sha256sum backup.tar.gz > backup.sha256
```

## Response Plan

1. Isolate affected systems
2. Identify the ransomware variant
3. Report to authorities
4. Restore from clean backups
5. Conduct post-incident analysis

Never pay the ransom - it funds criminal activity and doesn't guarantee recovery."#
                .to_string(),
            author: "Security Analyst".to_string(),
            date: date!(2024 - 12 - 05),
            tags: vec![
                "ransomware".to_string(),
                "defense".to_string(),
                "backup".to_string(),
            ],
            read_time: 6,
            cover_image: None,
        },
        Post {
            id: "4".to_string(),
            title: "Reduce Your Digital Footprint: Every Click Counts".to_string(),
            slug: "reducing-digital-footprint".to_string(),
            excerpt: "Every online action leaves a trace. Learn how to reduce your digital footprint and protect yourself from fraud.".to_string(),
            content: r#"# Reduce Your Digital Footprint: Every Click Counts

In today's hyper-connected world, every single action you take online leaves a trace—a digital breadcrumb that can be exploited. From the websites you visit to the apps you use, your digital footprint is growing larger by the day, and with it, your vulnerability to fraud.

Let's face it: the internet is not as safe as we like to believe. Every "free" service you use, every social media post you make, and every online purchase you complete is another piece of data that can be used against you. Cybercriminals are lurking, waiting for the right opportunity to exploit your information. And the more you share, the easier you make it for them.

## Simple Steps to Protect Yourself

1. **Use Multi-Factor Authentication (MFA):** Always enable MFA on your accounts. It adds an extra layer of security, making it harder for attackers to gain access.
2. **Adopt a Password Manager:** Stop reusing passwords! A password manager can generate and store strong, unique passwords for all your accounts.
3. **Delay Sharing on Social Media:** Love posting vacation pictures? Wait until you're back home to share them. Real-time updates can alert criminals to your absence.
4. **Limit Data Sharing:** Think twice before signing up for new apps or services. Only provide the minimum information required.
5. **Use Privacy-Focused Tools:** Switch to browsers, search engines, and email providers that prioritize your privacy.

## Why It Matters

Think about it: do you really need to post your vacation photos in real-time, letting the world know you're not home? Do you need to sign up for yet another app that asks for your personal details? Every unnecessary action you take online increases your exposure and, consequently, your chances of becoming a victim of fraud.

It's time to take control. Start by questioning every online activity. Do you really need to share that information? Can you minimize the data you provide? Use privacy-focused tools, limit your social media presence, and think twice before clicking "Accept" on those endless terms and conditions.

Remember, the less you share, the less there is to exploit. Reducing your digital footprint isn't just a choice—it's a necessity in the fight against online fraud. Take action now, because every click counts."#
                .to_string(),
            author: "Haden Pereira".to_string(),
            date: date!(2026 - 01 - 24),
            tags: vec![
                "cybersecurity".to_string(),
                "digital footprint".to_string(),
                "online safety".to_string(),
                "fraud prevention".to_string(),
            ],
            read_time: 5,
            cover_image: None,
        },
    ]
}
