use crate::components::icons::Icon;

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ValueProp {
    pub icon: Icon,
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct PolicySection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const VALUE_PROPS: [ValueProp; 3] = [
    ValueProp {
        icon: Icon::Zap,
        accent: "blue",
        title: "Lightning Fast",
        description: "Optimized algorithms and modern tech stacks ensure your app loads instantly and scales effortlessly.",
    },
    ValueProp {
        icon: Icon::Cpu,
        accent: "purple",
        title: "AI-Core Integration",
        description: "Deep integration of LLMs and machine learning models directly into your business logic.",
    },
    ValueProp {
        icon: Icon::CheckCircle,
        accent: "emerald",
        title: "Precision Engineering",
        description: "Clean, maintainable architecture built to industry standards with 99.9% uptime reliability.",
    },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::MessageCircle,
        title: "Natural Language Processing",
        description: "Integrate chatbots and assistants that understand context, sentiment, and intent to support your users 24/7.",
    },
    Feature {
        icon: Icon::Database,
        title: "Smart Data Analytics",
        description: "Turn raw data into actionable insights with predictive modeling and automated reporting dashboards.",
    },
    Feature {
        icon: Icon::Layout,
        title: "Workflow Automation",
        description: "Eliminate repetitive tasks. Let our AI agents handle scheduling, data entry, and email routing automatically.",
    },
    Feature {
        icon: Icon::Globe,
        title: "Global Scalability",
        description: "Built on cloud-native architecture (AWS/Google Cloud) to serve users worldwide with low latency.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Enterprise Security",
        description: "Bank-grade encryption, secure authentication, and privacy-first AI implementation compliant with GDPR.",
    },
    Feature {
        icon: Icon::Code,
        title: "Custom API Integration",
        description: "Seamlessly connect your new AI tool with your existing CRM, ERP, or legacy systems.",
    },
];

pub const TECH_STACK: [&str; 11] = [
    "React",
    "Next.js",
    "Python",
    "TensorFlow",
    "OpenAI",
    "Claude",
    "Perplexity AI",
    "Gemini",
    "Node.js",
    "PostgreSQL",
    "AWS",
];

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        step: "01",
        title: "Discovery",
        description: "We analyze your needs and data strategy.",
    },
    ProcessStep {
        step: "02",
        title: "Prototype",
        description: "Visual mockups and architecture planning.",
    },
    ProcessStep {
        step: "03",
        title: "Development",
        description: "Agile coding with regular updates.",
    },
    ProcessStep {
        step: "04",
        title: "Deploy",
        description: "Launch, monitor, and scale.",
    },
];

pub const PRIVACY_SECTIONS: [PolicySection; 4] = [
    PolicySection {
        heading: "1. Information We Collect",
        body: "At JinaMatrix.in, we collect information you provide directly to us, such as when you request a quote, sign up for our newsletter, or communicate with us. This may include your name, email address, phone number, and company details.",
    },
    PolicySection {
        heading: "2. How We Use Information",
        body: "We use the information to build and deploy your AI web applications, maintain our services, and communicate with you regarding your project status or new features.",
    },
    PolicySection {
        heading: "3. Data Security",
        body: "We implement appropriate technical and organizational measures to protect your personal data against unauthorized alteration, loss, or misuse.",
    },
    PolicySection {
        heading: "4. Contact Us",
        body: "If you have any questions about this Privacy Policy, please contact us at m.nath190702@gmail.com.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONTACT_EMAIL;
    use std::collections::HashSet;

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn tech_badges_are_unique() {
        // Badges are keyed by label when rendered.
        let labels: HashSet<_> = TECH_STACK.iter().collect();
        assert_eq!(labels.len(), TECH_STACK.len());
    }

    #[test]
    fn feature_titles_are_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn privacy_contact_uses_configured_email() {
        let last = PRIVACY_SECTIONS.last().map(|s| s.body).unwrap_or_default();
        assert!(last.contains(CONTACT_EMAIL));
    }
}
