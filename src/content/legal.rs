pub const LAST_UPDATED: &str = "January 30, 2026";

pub struct Clause {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const PRIVACY: &[Clause] = &[
    Clause {
        heading: "1. Information We Collect",
        body: "We collect the details you give us through our contact and referral forms, such as your name, email address, phone number and project information. We also collect basic, anonymised usage data to improve our website.",
    },
    Clause {
        heading: "2. How We Use Your Information",
        body: "We use your information to respond to enquiries, deliver our services, process referral commissions and send updates you have asked for. We do not sell your personal data.",
    },
    Clause {
        heading: "3. Sharing of Information",
        body: "We share data only with service providers who help us run our business, under contracts that require them to protect it, or when the law requires us to.",
    },
    Clause {
        heading: "4. Data Security",
        body: "We use industry-standard safeguards to protect your information. No method of transmission over the internet is completely secure, but we work to protect your data.",
    },
    Clause {
        heading: "5. Data Retention",
        body: "We keep personal data only as long as needed for the purposes described here or as required by law.",
    },
    Clause {
        heading: "6. Your Rights",
        body: "You have the right to access, correct, delete, or export your personal data. Contact us at any time to exercise these rights.",
    },
    Clause {
        heading: "7. Changes to This Policy",
        body: "We may update this policy from time to time. The date at the top of this page shows when it was last revised.",
    },
];

pub const TERMS: &[Clause] = &[
    Clause {
        heading: "1. Acceptance of Terms",
        body: "These Terms and Conditions constitute a legally binding agreement between you and Kunamix Digital Solutions. By using our website or services you accept them.",
    },
    Clause {
        heading: "2. Services",
        body: "The scope, timeline and fees for each engagement are defined in a separate proposal or statement of work.",
    },
    Clause {
        heading: "3. Payments",
        body: "Invoices are payable within the period stated on them. Work may be paused while invoices are overdue.",
    },
    Clause {
        heading: "4. Intellectual Property",
        body: "On full payment, ownership of project deliverables transfers to the client, excluding pre-existing tools and libraries.",
    },
    Clause {
        heading: "5. Referral Program",
        body: "Referral commissions are paid only for clients who sign a contract and pay their first milestone. Commission rates are confirmed in writing for each referral.",
    },
    Clause {
        heading: "6. Limitation of Liability",
        body: "Our total liability for any claim is limited to the fees paid for the services giving rise to the claim.",
    },
    Clause {
        heading: "7. Governing Law",
        body: "These terms are governed by the laws of India. Disputes are subject to the courts of Bengaluru.",
    },
];
