use crate::{components::Crumb, config::Config, content::BlogPost, seo::PageMetadata};

pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
    pub crumb: &'static str,
}

impl Hero {
    pub fn breadcrumb(&self) -> Vec<Crumb> {
        vec![Crumb::link("Home", "/"), Crumb::here(self.crumb)]
    }
}

/// A fixed page of the site: its path, head metadata and hero copy.
pub struct PageInfo {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub hero: Option<Hero>,
}

impl PageInfo {
    pub fn metadata(&self, config: &Config) -> PageMetadata {
        let url = config.absolute_url(self.path);
        PageMetadata {
            title: Some(self.title.to_string()),
            description: Some(self.description.to_string()),
            canonical: Some(url.clone()),
            og_title: Some(self.og_title.to_string()),
            og_description: Some(self.og_description.to_string()),
            og_url: Some(url),
            ..Default::default()
        }
    }

    pub fn hero(&self) -> &Hero {
        self.hero.as_ref().unwrap_or(&FALLBACK_HERO)
    }
}

/// Head metadata for a blog post; the cover image doubles as the share image.
pub(crate) fn post_metadata(config: &Config, post: &BlogPost) -> PageMetadata {
    let url = config.absolute_url(&post.path());
    PageMetadata {
        title: Some(post.meta_title.clone()),
        description: Some(post.meta_description.clone()),
        canonical: Some(url.clone()),
        og_title: Some(post.title.clone()),
        og_description: Some(post.meta_description.clone()),
        og_image: post.cover_image.as_deref().map(|src| config.absolute_url(src)),
        og_url: Some(url),
        ..Default::default()
    }
}

const FALLBACK_HERO: Hero = Hero {
    title: "Kunamix",
    subtitle: "",
    badge: "",
    crumb: "",
};

pub(crate) const HOME: PageInfo = PageInfo {
    path: "/",
    title: "Kunamix | Web, Mobile & MVP Development Agency",
    description: "Kunamix Digital Solutions builds web applications, mobile apps and MVPs for startups and enterprises, with rapid delivery and measurable results.",
    og_title: "Kunamix Digital Solutions",
    og_description: "Web, mobile and MVP development for ambitious teams.",
    hero: None,
};

pub(crate) const ABOUT: PageInfo = PageInfo {
    path: "/about",
    title: "About Us | Kunamix - Digital Solutions & MVP Development",
    description: "Learn about Kunamix - a results-driven digital agency specializing in MVP development, web applications, and enterprise-grade solutions. Meet our expert team.",
    og_title: "About Kunamix | Digital Solutions Agency",
    og_description: "Expert developers and designers delivering enterprise-grade digital solutions with rapid deployment and measurable results.",
    hero: Some(Hero {
        title: "About Us",
        subtitle: "A passionate team of developers and designers creating beautiful, functional digital solutions that make a real difference.",
        badge: "✨ Meet Kunamix Digital Solutions",
        crumb: "About",
    }),
};

pub(crate) const SERVICES: PageInfo = PageInfo {
    path: "/services",
    title: "Our Services | Kunamix - Web, Mobile & MVP Development",
    description: "Explore our comprehensive digital services including web development, mobile apps, UI/UX design, MVP development, and enterprise solutions. Get started today.",
    og_title: "Services | Kunamix Digital Solutions",
    og_description: "Full-stack web development, mobile apps, UI/UX design, and MVP development services tailored to your business needs.",
    hero: Some(Hero {
        title: "Our Services",
        subtitle: "Comprehensive digital solutions tailored to your business needs, from web development to brand design.",
        badge: "🚀 What We Offer",
        crumb: "Services",
    }),
};

pub(crate) const PORTFOLIO: PageInfo = PageInfo {
    path: "/portfolio",
    title: "Portfolio | Kunamix - Our Work & Case Studies",
    description: "Explore our portfolio of successful projects including web applications, mobile apps, MVPs, and enterprise solutions. See the quality of our work.",
    og_title: "Portfolio | Kunamix Digital Solutions",
    og_description: "View our collection of successful digital projects, case studies, and client work showcasing our expertise.",
    hero: Some(Hero {
        title: "Our Portfolio",
        subtitle: "Explore our collection of successful projects: real solutions delivering real impact for our clients.",
        badge: "✨ Featured Work",
        crumb: "Portfolio",
    }),
};

pub(crate) const CONTACT: PageInfo = PageInfo {
    path: "/contact",
    title: "Contact Us | Kunamix - Get In Touch",
    description: "Contact Kunamix for your digital project needs. Schedule a free consultation to discuss web development, mobile apps, MVP development, and more.",
    og_title: "Contact Us | Kunamix Digital Solutions",
    og_description: "Get in touch with our team to discuss your project. Free consultation available for web, mobile, and MVP development.",
    hero: Some(Hero {
        title: "Get In Touch",
        subtitle: "Have a project in mind? We'd love to hear about it. Reach out and let's build something amazing together.",
        badge: "💬 Let's Talk",
        crumb: "Contact",
    }),
};

pub(crate) const BLOG: PageInfo = PageInfo {
    path: "/blog",
    title: "Blog | Kunamix - MVP Development & Startup Guides",
    description: "Read our latest articles about MVP development, startups, technology stack, and app development tips from industry experts.",
    og_title: "Blog | Kunamix Digital Solutions",
    og_description: "Insights, guides, and tutorials on MVP development, startups, and technology",
    hero: Some(Hero {
        title: "Our Blog",
        subtitle: "Insights, guides, and tutorials on MVP development, startups, and technology from our team.",
        badge: "📝 Latest Articles",
        crumb: "Blog",
    }),
};

pub(crate) const REFER: PageInfo = PageInfo {
    path: "/refer",
    title: "Refer & Earn | Kunamix - Earn Up to 20% Commission",
    description: "Refer clients to Kunamix and earn generous commission rewards. Up to 20% for every successful project. Join our referral program today.",
    og_title: "Refer & Earn | Kunamix Digital Solutions",
    og_description: "Know someone who needs digital solutions? Refer them and earn up to 20% commission on every successful project.",
    hero: Some(Hero {
        title: "Refer & Earn",
        subtitle: "Know someone who needs exceptional digital solutions? Refer them to us and earn up to 20% commission for every successful project!",
        badge: "🎁 Referral Program",
        crumb: "Refer & Earn",
    }),
};

pub(crate) const PRIVACY: PageInfo = PageInfo {
    path: "/privacy-policy",
    title: "Privacy Policy | Kunamix - Your Privacy Matters",
    description: "Read the Kunamix privacy policy. We are committed to protecting your privacy and handling your data with care and transparency.",
    og_title: "Privacy Policy | Kunamix Digital Solutions",
    og_description: "We are committed to protecting your privacy and handling your data with care and transparency.",
    hero: Some(Hero {
        title: "Privacy Policy",
        subtitle: "We are committed to protecting your privacy and handling your data with care and transparency.",
        badge: "🛡️ Your Privacy Matters",
        crumb: "Privacy Policy",
    }),
};

pub(crate) const TERMS: PageInfo = PageInfo {
    path: "/terms-conditions",
    title: "Terms & Conditions | Kunamix - Legal",
    description: "Read the Kunamix terms and conditions. Please review these terms carefully before using our services.",
    og_title: "Terms & Conditions | Kunamix Digital Solutions",
    og_description: "Please read these terms and conditions carefully before using our services.",
    hero: Some(Hero {
        title: "Terms & Conditions",
        subtitle: "Please read these terms and conditions carefully before using our services.",
        badge: "⚖️ Legal Document",
        crumb: "Terms & Conditions",
    }),
};

/// Every fixed page, in sitemap order.
pub(crate) const ALL: &[&PageInfo] = &[
    &HOME, &ABOUT, &SERVICES, &PORTFOLIO, &BLOG, &REFER, &CONTACT, &PRIVACY, &TERMS,
];
