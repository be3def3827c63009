pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "🎁",
        title: "Up to 20% Commission",
        description: "Earn up to 20% of the project value for every referred client who signs with us.",
    },
    Benefit {
        icon: "🤝",
        title: "No Limits",
        description: "Refer as many clients as you like. Every successful project pays out.",
    },
    Benefit {
        icon: "⚡",
        title: "Fast Payouts",
        description: "Commission is paid within 30 days of the client's first milestone payment.",
    },
];

pub const HOW_IT_WORKS: &[Step] = &[
    Step {
        step: 1,
        title: "Submit a referral",
        description: "Tell us who you are and who needs help, using the form below.",
    },
    Step {
        step: 2,
        title: "We reach out",
        description: "Our team contacts your referral for a free consultation.",
    },
    Step {
        step: 3,
        title: "Project kicks off",
        description: "Once the client signs, we keep you updated on progress.",
    },
    Step {
        step: 4,
        title: "You get paid",
        description: "Receive your commission after the first milestone is paid.",
    },
];

pub const SERVICES: &[&str] = &[
    "Web Development",
    "Mobile App Development",
    "MVP Development",
    "UI/UX Design",
    "E-commerce Solutions",
    "Enterprise Software",
    "Cloud & DevOps",
    "Digital Marketing",
];

/// A selectable budget range. `value` is what the form submits.
pub struct Budget {
    pub value: &'static str,
    pub label: &'static str,
}

pub const BUDGETS: &[Budget] = &[
    Budget { value: "under-50k", label: "Under ₹50,000 (15% commission)" },
    Budget { value: "50k-1l", label: "₹50,000 - ₹1,00,000 (15% commission)" },
    Budget { value: "1l-3l", label: "₹1,00,000 - ₹3,00,000 (20% commission)" },
    Budget { value: "3l-5l", label: "₹3,00,000 - ₹5,00,000 (20% commission)" },
    Budget { value: "5l-plus", label: "₹5,00,000+ (20% commission)" },
];

pub fn is_budget(value: &str) -> bool {
    BUDGETS.iter().any(|b| b.value == value)
}
