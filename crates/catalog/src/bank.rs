//! Static question bank content. Text, type, category, and keyword sets
//! are carried over verbatim from `ai_modules/nlp/question_generator.py`'s
//! `_initialize_question_bank`/`_initialize_upsc_questions`, re-expressed
//! as Rust data instead of Python dict literals.

use interview_core::Difficulty;

/// One bank entry prior to final selection; `difficulty` is `None` for
/// entries the original source tags only by bucket membership (general,
/// hr, UPSC) and `Some` for entries with an explicit author tag
/// (technical bank). `select::generate` re-classifies regardless either
/// way per the Open Question decision in `DESIGN.md`.
pub struct RawQuestion {
    pub text: &'static str,
    pub question_type: &'static str,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub difficulty: Option<Difficulty>,
}

macro_rules! q {
    ($text:expr, $qtype:expr, $category:expr, [$($kw:expr),* $(,)?]) => {
        RawQuestion { text: $text, question_type: $qtype, category: $category, keywords: &[$($kw),*], difficulty: None }
    };
    ($text:expr, $qtype:expr, $category:expr, [$($kw:expr),* $(,)?], $diff:expr) => {
        RawQuestion { text: $text, question_type: $qtype, category: $category, keywords: &[$($kw),*], difficulty: Some($diff) }
    };
}

pub fn general_easy() -> Vec<RawQuestion> {
    vec![
        q!("Tell me about yourself.", "behavioral", "general", ["background", "experience", "skills"]),
        q!("What are your greatest strengths?", "behavioral", "general", ["skills", "abilities", "strengths"]),
        q!("Why do you want to work here?", "behavioral", "general", ["motivation", "company", "interest"]),
        q!("Where do you see yourself in 5 years?", "behavioral", "general", ["goals", "career", "future"]),
        q!("What makes you a good fit for this role?", "behavioral", "general", ["fit", "qualifications", "skills"]),
    ]
}

pub fn general_medium() -> Vec<RawQuestion> {
    vec![
        q!("Describe a challenging situation you faced and how you handled it.", "situational", "general", ["challenge", "problem-solving", "resolution"]),
        q!("How do you handle working under pressure?", "behavioral", "general", ["stress", "pressure", "coping"]),
        q!("Describe a time when you had to work with a difficult team member.", "situational", "general", ["teamwork", "conflict", "resolution"]),
        q!("What is your biggest weakness and how are you working on it?", "behavioral", "general", ["weakness", "improvement", "self-awareness"]),
        q!("Tell me about a time you failed and what you learned from it.", "situational", "general", ["failure", "learning", "growth"]),
    ]
}

pub fn general_hard() -> Vec<RawQuestion> {
    vec![
        q!("Describe a situation where you had to make a decision with incomplete information.", "situational", "general", ["decision-making", "uncertainty", "judgment"]),
        q!("How do you prioritize when you have multiple urgent tasks?", "behavioral", "general", ["prioritization", "time management", "organization"]),
        q!("Tell me about a time you had to convince someone to see things your way.", "situational", "general", ["persuasion", "communication", "influence"]),
    ]
}

pub fn hr_easy() -> Vec<RawQuestion> {
    vec![
        q!("What attracted you to apply for this position?", "hr", "hr", ["motivation", "interest", "position"]),
        q!("How would your colleagues describe you?", "hr", "hr", ["personality", "teamwork", "perception"]),
        q!("What do you know about our company?", "hr", "hr", ["research", "company", "knowledge"]),
        q!("What are your salary expectations?", "hr", "hr", ["salary", "compensation", "expectations"]),
    ]
}

pub fn hr_medium() -> Vec<RawQuestion> {
    vec![
        q!("Why are you leaving your current job?", "hr", "hr", ["career change", "motivation", "growth"]),
        q!("How do you handle feedback and criticism?", "hr", "hr", ["feedback", "growth mindset", "adaptation"]),
        q!("Describe your ideal work environment.", "hr", "hr", ["environment", "culture", "preferences"]),
        q!("What are your long-term career goals?", "hr", "hr", ["career", "goals", "ambition"]),
        q!("How do you maintain work-life balance?", "hr", "hr", ["balance", "well-being", "management"]),
    ]
}

pub fn hr_hard() -> Vec<RawQuestion> {
    vec![
        q!("Tell me about a time you disagreed with management and how you handled it.", "hr", "hr", ["conflict", "management", "communication"]),
        q!("How would you handle an ethical dilemma at work?", "hr", "hr", ["ethics", "integrity", "decision-making"]),
        q!("What would you do if you were asked to work on something outside your job description?", "hr", "hr", ["flexibility", "boundaries", "adaptation"]),
    ]
}

pub fn technical_python() -> Vec<RawQuestion> {
    vec![
        q!("Explain the difference between lists and tuples in Python.", "technical", "python", ["mutable", "immutable", "data structures"], Difficulty::Easy),
        q!("What are decorators in Python and how do you use them?", "technical", "python", ["decorator", "function", "wrapper"], Difficulty::Medium),
        q!("Explain the Global Interpreter Lock (GIL) in Python.", "technical", "python", ["GIL", "threading", "concurrency"], Difficulty::Hard),
        q!("How do you manage memory in Python?", "technical", "python", ["garbage collection", "memory", "references"], Difficulty::Medium),
    ]
}

pub fn technical_java() -> Vec<RawQuestion> {
    vec![
        q!("What is the difference between abstract classes and interfaces in Java?", "technical", "java", ["abstract", "interface", "inheritance"], Difficulty::Easy),
        q!("Explain the concept of multithreading in Java.", "technical", "java", ["threads", "concurrency", "synchronization"], Difficulty::Medium),
        q!("What are the different types of memory areas in JVM?", "technical", "java", ["heap", "stack", "JVM", "memory"], Difficulty::Hard),
    ]
}

pub fn technical_javascript() -> Vec<RawQuestion> {
    vec![
        q!("Explain closures in JavaScript.", "technical", "javascript", ["closure", "scope", "function"], Difficulty::Medium),
        q!("What is the difference between == and === in JavaScript?", "technical", "javascript", ["equality", "comparison", "type coercion"], Difficulty::Easy),
        q!("Explain the event loop in JavaScript.", "technical", "javascript", ["event loop", "async", "callback"], Difficulty::Hard),
    ]
}

pub fn technical_algorithms() -> Vec<RawQuestion> {
    vec![
        q!("Explain the difference between linear and binary search.", "technical", "algorithms", ["search", "complexity", "algorithm"], Difficulty::Easy),
        q!("How would you detect a cycle in a linked list?", "technical", "algorithms", ["cycle", "linked list", "two pointers"], Difficulty::Medium),
        q!("Explain different sorting algorithms and their time complexities.", "technical", "algorithms", ["sorting", "time complexity", "algorithms"], Difficulty::Medium),
        q!("Describe dynamic programming and when to use it.", "technical", "algorithms", ["dynamic programming", "optimization", "memoization"], Difficulty::Hard),
    ]
}

pub fn technical_databases() -> Vec<RawQuestion> {
    vec![
        q!("What is the difference between SQL and NoSQL databases?", "technical", "databases", ["SQL", "NoSQL", "database"], Difficulty::Easy),
        q!("Explain database normalization and its forms.", "technical", "databases", ["normalization", "1NF", "2NF", "3NF"], Difficulty::Medium),
        q!("What is database indexing and how does it improve performance?", "technical", "databases", ["indexing", "performance", "optimization"], Difficulty::Medium),
        q!("Explain ACID properties in databases.", "technical", "databases", ["ACID", "transactions", "consistency"], Difficulty::Medium),
    ]
}

pub fn technical_system_design() -> Vec<RawQuestion> {
    vec![
        q!("How would you design a URL shortening service like bit.ly?", "technical", "system_design", ["system design", "scalability", "architecture"], Difficulty::Hard),
        q!("Explain the concept of load balancing.", "technical", "system_design", ["load balancing", "distribution", "scalability"], Difficulty::Medium),
        q!("What is caching and when would you use it?", "technical", "system_design", ["caching", "performance", "Redis"], Difficulty::Medium),
    ]
}

pub fn upsc_current_affairs(difficulty: Difficulty) -> Vec<RawQuestion> {
    match difficulty {
        Difficulty::Easy => vec![
            q!("What do you understand by sustainable development? Why is it important for India?", "upsc", "current_affairs", ["sustainability", "environment", "development"]),
            q!("What are the major initiatives taken by the government for digital India?", "upsc", "current_affairs", ["digital", "technology", "governance"]),
            q!("Discuss the importance of renewable energy in India's energy security.", "upsc", "current_affairs", ["renewable", "energy", "security"]),
        ],
        Difficulty::Medium => vec![
            q!("Analyze the impact of climate change on Indian agriculture and suggest measures to address it.", "upsc", "current_affairs", ["climate", "agriculture", "adaptation"]),
            q!("What are the challenges faced by India in achieving its Sustainable Development Goals (SDGs)?", "upsc", "current_affairs", ["SDG", "development", "challenges"]),
            q!("Discuss India's foreign policy challenges in the current geopolitical scenario.", "upsc", "current_affairs", ["foreign policy", "diplomacy", "geopolitics"]),
        ],
        Difficulty::Hard => vec![
            q!("Critically analyze India's neighborhood first policy and its effectiveness.", "upsc", "current_affairs", ["foreign policy", "neighborhood", "diplomacy"]),
            q!("Examine the role of technology in transforming governance. What are the ethical concerns?", "upsc", "current_affairs", ["technology", "governance", "ethics"]),
        ],
    }
}

pub fn upsc_ethics(difficulty: Difficulty) -> Vec<RawQuestion> {
    match difficulty {
        Difficulty::Easy => vec![
            q!("What do you understand by ethics in public administration?", "upsc", "ethics", ["ethics", "administration", "values"]),
            q!("What are the qualities you think a civil servant should possess?", "upsc", "ethics", ["qualities", "civil servant", "integrity"]),
            q!("Define integrity and explain its importance in public service.", "upsc", "ethics", ["integrity", "honesty", "public service"]),
        ],
        Difficulty::Medium => vec![
            q!("You are posted as a District Collector. A powerful politician asks you to transfer a file favorably. How would you handle this?", "upsc", "ethics", ["ethics", "pressure", "decision-making"]),
            q!("Discuss the role of conscience in ethical decision-making with examples.", "upsc", "ethics", ["conscience", "ethics", "morality"]),
            q!("What are the ethical dilemmas faced by civil servants? How can they be resolved?", "upsc", "ethics", ["dilemma", "ethics", "resolution"]),
        ],
        Difficulty::Hard => vec![
            q!("A subordinate reports corruption by your superior officer who is well-connected. What would you do?", "upsc", "ethics", ["corruption", "whistleblowing", "integrity"]),
            q!("Discuss the conflict between following rules and achieving outcomes in administration.", "upsc", "ethics", ["rules", "outcomes", "governance"]),
        ],
    }
}

pub fn upsc_personality(difficulty: Difficulty) -> Vec<RawQuestion> {
    match difficulty {
        Difficulty::Easy => vec![
            q!("Tell us about yourself and what motivated you to join civil services.", "upsc", "personality", ["motivation", "background", "aspiration"]),
            q!("What are your hobbies and how do they contribute to your personality?", "upsc", "personality", ["hobbies", "personality", "interests"]),
            q!("Who has been your role model and why?", "upsc", "personality", ["role model", "inspiration", "values"]),
        ],
        Difficulty::Medium => vec![
            q!("What would you do if you were posted in a conflict-affected area?", "upsc", "personality", ["conflict", "administration", "challenges"]),
            q!("How would you handle a situation where your personal beliefs conflict with your official duties?", "upsc", "personality", ["beliefs", "duty", "conflict"]),
            q!("Describe a challenging situation you faced and how you overcame it.", "upsc", "personality", ["challenge", "resilience", "problem-solving"]),
        ],
        Difficulty::Hard => vec![
            q!("If you had to implement an unpopular but necessary policy, how would you gain public support?", "upsc", "personality", ["policy", "communication", "leadership"]),
            q!("What are your views on the role of bureaucracy in a democracy?", "upsc", "personality", ["bureaucracy", "democracy", "governance"]),
        ],
    }
}

pub fn upsc_administrative(difficulty: Difficulty) -> Vec<RawQuestion> {
    match difficulty {
        Difficulty::Easy => vec![
            q!("What do you understand by good governance?", "upsc", "administrative", ["governance", "administration", "principles"]),
            q!("What is the role of a District Magistrate?", "upsc", "administrative", ["DM", "administration", "responsibilities"]),
        ],
        Difficulty::Medium => vec![
            q!("How would you ensure effective implementation of a welfare scheme at the grassroots level?", "upsc", "administrative", ["implementation", "welfare", "grassroots"]),
            q!("Discuss the importance of coordination between different government departments.", "upsc", "administrative", ["coordination", "governance", "efficiency"]),
            q!("How can e-governance improve public service delivery in rural areas?", "upsc", "administrative", ["e-governance", "rural", "technology"]),
        ],
        Difficulty::Hard => vec![
            q!("During a natural disaster, you have limited resources. How would you prioritize relief distribution?", "upsc", "administrative", ["disaster", "prioritization", "management"]),
            q!("Propose reforms for improving efficiency in public administration.", "upsc", "administrative", ["reforms", "efficiency", "administration"]),
        ],
    }
}

pub fn upsc_opinion(difficulty: Difficulty) -> Vec<RawQuestion> {
    match difficulty {
        Difficulty::Easy => vec![
            q!("What are your views on reservation policy in India?", "upsc", "opinion", ["reservation", "policy", "equality"]),
            q!("Should social media be regulated? Share your opinion.", "upsc", "opinion", ["social media", "regulation", "freedom"]),
        ],
        Difficulty::Medium => vec![
            q!("What is your opinion on the balance between development and environmental conservation?", "upsc", "opinion", ["development", "environment", "balance"]),
            q!("Do you think capital punishment should be abolished? Justify your view.", "upsc", "opinion", ["capital punishment", "justice", "ethics"]),
            q!("What are your views on One Nation One Election?", "upsc", "opinion", ["election", "democracy", "reform"]),
        ],
        Difficulty::Hard => vec![
            q!("Critically examine the statement: 'Democracy is the best form of government'.", "upsc", "opinion", ["democracy", "government", "analysis"]),
            q!("Should there be a uniform civil code in India? Present arguments for and against.", "upsc", "opinion", ["uniform civil code", "law", "secularism"]),
        ],
    }
}

pub const UPSC_CATEGORIES: &[&str] = &[
    "current_affairs",
    "ethics",
    "personality",
    "administrative",
    "opinion",
];

pub fn upsc_bank_for(category: &str, difficulty: Difficulty) -> Vec<RawQuestion> {
    match category {
        "current_affairs" => upsc_current_affairs(difficulty),
        "ethics" => upsc_ethics(difficulty),
        "personality" => upsc_personality(difficulty),
        "administrative" => upsc_administrative(difficulty),
        "opinion" => upsc_opinion(difficulty),
        _ => Vec::new(),
    }
}
