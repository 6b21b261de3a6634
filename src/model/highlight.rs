/// A card in the About tab's "Key Highlights" strip and the dialog it opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
    pub image: &'static str,
    pub modal_title: &'static str,
    pub modal_date: &'static str,
    pub modal_text: &'static str,
}

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "Innovation-Driven",
        text: "Passionate about creating impactful solutions that address real-world problems. Expertise in merging AI and hardware for unique innovations.",
        image: "/assets/images/highlights/avatar-1.png",
        modal_title: "Innovation-Driven Mindset",
        modal_date: "November 25, 2024",
        modal_text: "I believe in using technology to solve real problems. Every project is designed with impact in mind, whether it's helping farmers increase yield, ensuring road safety, or automating critical institutional processes.",
    },
    Highlight {
        title: "Technical Excellence",
        text: "Strong proficiency in Python, Java, Arduino, and modern APIs. Experienced with embedded systems, IoT integration, and AI APIs.",
        image: "/assets/images/highlights/avatar-2.png",
        modal_title: "Technical Excellence",
        modal_date: "November 25, 2024",
        modal_text: "Strong proficiency in Python, Java, Arduino, and modern APIs. Experienced with embedded systems, IoT integration, AI APIs (Gemini), face recognition systems, and full-stack web development.",
    },
    Highlight {
        title: "Problem Solver",
        text: "Skilled at breaking down complex systems into elegant solutions. Focus on scalability and user impact through algorithmic problem-solving.",
        image: "/assets/images/highlights/avatar-3.png",
        modal_title: "Problem Solver",
        modal_date: "November 25, 2024",
        modal_text: "Skilled at breaking down complex systems into elegant solutions. Strong background in algorithm development, data structures, and system-level problem-solving.",
    },
    Highlight {
        title: "Social Impact",
        text: "Projects focus on supporting farmers, enhancing road safety, and protecting vulnerable populations through technology and innovation.",
        image: "/assets/images/highlights/avatar-4.png",
        modal_title: "Social Impact",
        modal_date: "November 25, 2024",
        modal_text: "Driven to create solutions with real-world impact. Projects focus on supporting farmers, enhancing road safety, automating education, and protecting vulnerable populations.",
    },
];
