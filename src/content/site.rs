//! Copy for the agency's informational pages.

pub const COMPANY: &str = "Kunamix Digital Solutions";
pub const BRAND: &str = "Kunamix";
pub const CONTACT_EMAIL: &str = "hello@kunamix.com";
pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const WHATSAPP_URL: &str = "https://wa.me/919876543210";
pub const OFFICE_ADDRESS: &str = "Bengaluru, Karnataka, India";
pub const TWITTER_HANDLE: &str = "@kunamix";

pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

pub struct Project {
    pub name: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
}

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        summary: "Fast, accessible web applications built on modern frameworks.",
        features: &["Single-page and server-rendered apps", "API design", "Performance tuning"],
    },
    Service {
        title: "Mobile Apps",
        summary: "Cross-platform iOS and Android apps from a single codebase.",
        features: &["React Native and Flutter", "Offline support", "App store releases"],
    },
    Service {
        title: "MVP Development",
        summary: "From idea to launched product in weeks, not months.",
        features: &["Scope workshops", "Rapid prototyping", "Launch support"],
    },
    Service {
        title: "UI/UX Design",
        summary: "Interfaces people understand on the first try.",
        features: &["User research", "Design systems", "Usability testing"],
    },
    Service {
        title: "Enterprise Solutions",
        summary: "Secure, scalable systems that integrate with what you already run.",
        features: &["Legacy modernisation", "SSO and compliance", "Cloud migration"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "FreshCart",
        category: "E-commerce",
        summary: "Grocery delivery platform with real-time order tracking.",
        stack: &["Next.js", "Node.js", "PostgreSQL"],
    },
    Project {
        name: "MediBook",
        category: "Healthcare",
        summary: "Appointment booking MVP launched in five weeks.",
        stack: &["React Native", "Firebase"],
    },
    Project {
        name: "LedgerFlow",
        category: "FinTech",
        summary: "Invoicing dashboard for small businesses with automated reminders.",
        stack: &["React", "Go", "AWS"],
    },
    Project {
        name: "LearnLoop",
        category: "EdTech",
        summary: "Course platform with video streaming and progress analytics.",
        stack: &["Vue", "Django", "Redis"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They took our idea to a working MVP in a month and helped us land our first customers.",
        name: "Rahul Verma",
        role: "Co-founder, MediBook",
    },
    Testimonial {
        quote: "Clear communication, fast delivery and code our in-house team was happy to inherit.",
        name: "Emily Carter",
        role: "CTO, LedgerFlow",
    },
];

pub const VALUES: &[Value] = &[
    Value {
        title: "Results over output",
        description: "We measure success by the outcomes our clients see, not lines of code.",
    },
    Value {
        title: "Rapid deployment",
        description: "Short iterations and early releases keep feedback flowing.",
    },
    Value {
        title: "Enterprise-grade quality",
        description: "Security, testing and documentation are part of every project.",
    },
];
