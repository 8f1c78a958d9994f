use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageContent {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub benefits: &'static [Benefit],
    pub steps: &'static [Step],
    pub faqs: &'static [Faq],
    pub disclaimer: &'static str,
}

pub const HEADLINE: &str =
    "Get Connected With Verified English-Speaking Dentists in Puerto Vallarta";

pub const TAGLINE: &str = "We introduce US and Canadian patients to established dental clinics \
     in Puerto Vallarta. Simple, transparent, no obligations.";

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Free Introduction Service",
        description: "No cost to you. We connect you with dentists who regularly work with foreign patients.",
    },
    Benefit {
        title: "English-Speaking Clinics",
        description: "All dentists in our network communicate fluently in English and understand the needs of international patients.",
    },
    Benefit {
        title: "You Choose Who to Contact",
        description: "We provide information about multiple clinics. You decide which one(s) you'd like to speak with directly.",
    },
    Benefit {
        title: "Established Practices",
        description: "We only work with dental offices that have experience treating foreign patients and are located in Puerto Vallarta.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Submit Your Request",
        description: "Fill out the form with your information and what type of dental work you're considering.",
    },
    Step {
        number: 2,
        title: "Review Your Options",
        description: "We'll contact you over WhatsApp to share information about dentists in our network who match your needs. You choose who interests you.",
    },
    Step {
        number: 3,
        title: "Connect Directly",
        description: "We introduce you to your selected dentist(s). You communicate directly with them to book appointments and discuss details.",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Is there a cost to use this service?",
        answer: "No, there is no cost to you as a patient. Our service is free for people looking to connect with dentists in Puerto Vallarta. We are compensated by the dental clinics in our network.",
    },
    Faq {
        question: "Do I need to be in Puerto Vallarta already?",
        answer: "No, you can request an introduction before traveling. Many people use our service while planning their trip. Once connected, you can discuss scheduling directly with the dentist.",
    },
    Faq {
        question: "How will the dentist contact me?",
        answer: "After you choose which dentist you'd like to speak with, we'll facilitate the introduction via WhatsApp or your preferred contact method. From there, you communicate directly with the dental office.",
    },
    Faq {
        question: "Can I be introduced to more than one dentist?",
        answer: "Yes, absolutely. We encourage you to explore multiple options so you can make an informed decision about which dentist is the best fit for you.",
    },
    Faq {
        question: "What if I'm not satisfied with the dentist options?",
        answer: "You're under no obligation to proceed with any dentist we introduce you to. Our role is simply to make the connection. All decisions about treatment are entirely yours.",
    },
];

pub const DISCLAIMER: &str = "We are a connection service that introduces patients to dental \
     clinics in Puerto Vallarta. We do not provide medical advice, diagnose conditions, or \
     coordinate medical appointments. All treatment decisions, scheduling, and communications \
     happen directly between you and the dental office you choose. We are not a healthcare \
     provider or medical broker.";

pub const PAGE: PageContent = PageContent {
    headline: HEADLINE,
    tagline: TAGLINE,
    benefits: BENEFITS,
    steps: STEPS,
    faqs: FAQS,
    disclaimer: DISCLAIMER,
};

/// Which FAQ entry is expanded. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Indexes past the end of `FAQS` are treated as nothing open.
    pub fn with_open(index: Option<usize>) -> Self {
        Self {
            open: index.filter(|i| *i < FAQS.len()),
        }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opening an entry closes whichever one was open; toggling the open one
    /// closes it.
    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self::with_open(Some(index))
        }
    }
}
