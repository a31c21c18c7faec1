use crate::models::skill::{Difficulty, Question, SkillArea};

fn question(
    id: &str,
    prompt: &str,
    options: [&str; 4],
    correct_option_index: usize,
    difficulty: Difficulty,
    explanation: &str,
) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option_index,
        difficulty,
        explanation: explanation.to_string(),
    }
}

fn area(name: &str, description: &str, icon: &str, questions: Vec<Question>) -> SkillArea {
    SkillArea {
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        questions,
    }
}

/// The seven seed skill areas, in presentation order.
pub fn seed_skill_areas() -> Vec<SkillArea> {
    vec![
        area(
            "Mathematics & Analytical Reasoning",
            "Test your mathematical problem-solving and logical reasoning abilities",
            "Calculator",
            vec![
                question(
                    "math1",
                    "If a train travels 240 km in 3 hours, what is its average speed?",
                    ["60 km/h", "80 km/h", "90 km/h", "120 km/h"],
                    1,
                    Difficulty::Easy,
                    "Speed = Distance ÷ Time = 240 ÷ 3 = 80 km/h",
                ),
                question(
                    "math2",
                    "What is the next number in the sequence: 2, 6, 12, 20, 30, ?",
                    ["40", "42", "44", "46"],
                    1,
                    Difficulty::Medium,
                    "The differences are 4, 6, 8, 10, so the next difference is 12. 30 + 12 = 42",
                ),
                question(
                    "math3",
                    "A company's profit increased by 25% in the first year and decreased by 20% in the second year. If the initial profit was ₹100,000, what is the final profit?",
                    ["₹100,000", "₹105,000", "₹110,000", "₹125,000"],
                    0,
                    Difficulty::Hard,
                    "Year 1: 100,000 × 1.25 = 125,000. Year 2: 125,000 × 0.8 = 100,000",
                ),
                question(
                    "math4",
                    "If log₂(x) = 3, what is the value of x?",
                    ["6", "8", "9", "16"],
                    1,
                    Difficulty::Medium,
                    "log₂(x) = 3 means 2³ = x, so x = 8",
                ),
                question(
                    "math5",
                    "In a group of 100 people, 60 like tea, 50 like coffee, and 20 like both. How many like neither?",
                    ["10", "20", "30", "40"],
                    0,
                    Difficulty::Medium,
                    "Using Venn diagram: Tea only = 40, Coffee only = 30, Both = 20. Neither = 100 - (40 + 30 + 20) = 10",
                ),
            ],
        ),
        area(
            "Language & Communication",
            "Evaluate your verbal reasoning and communication skills",
            "MessageCircle",
            vec![
                question(
                    "lang1",
                    "Choose the word that best completes the analogy: Book : Author :: Painting : ?",
                    ["Canvas", "Artist", "Gallery", "Color"],
                    1,
                    Difficulty::Easy,
                    "A book is created by an author, just as a painting is created by an artist",
                ),
                question(
                    "lang2",
                    "Which sentence is grammatically correct?",
                    ["Neither of the students have completed their assignment", "Neither of the students has completed their assignment", "Neither of the students have completed his assignment", "Neither of the students has completed his assignment"],
                    1,
                    Difficulty::Medium,
                    "\"Neither\" is singular, so it takes \"has\". \"Their\" is acceptable for gender-neutral reference.",
                ),
                question(
                    "lang3",
                    "What is the main idea of this passage: \"Despite technological advances, human creativity remains irreplaceable in problem-solving. While AI can process data quickly, it lacks the intuitive leaps that lead to breakthrough innovations.\"",
                    ["Technology is advancing rapidly", "AI processes data quickly", "Human creativity is unique and valuable", "Problem-solving requires data processing"],
                    2,
                    Difficulty::Medium,
                    "The passage emphasizes that human creativity remains irreplaceable despite technological advances",
                ),
                question(
                    "lang4",
                    "Choose the most appropriate word: The speaker's argument was so _____ that even skeptics were convinced.",
                    ["verbose", "compelling", "lengthy", "complex"],
                    1,
                    Difficulty::Easy,
                    "\"Compelling\" means convincing or persuasive, which fits the context of convincing skeptics",
                ),
                question(
                    "lang5",
                    "Identify the logical fallacy: \"Everyone I know uses this brand, so it must be the best.\"",
                    ["Ad hominem", "Bandwagon fallacy", "Straw man", "False dilemma"],
                    1,
                    Difficulty::Hard,
                    "This is a bandwagon fallacy - assuming something is correct because many people believe it",
                ),
            ],
        ),
        area(
            "Scientific Reasoning",
            "Test your understanding of scientific concepts and logical thinking",
            "Microscope",
            vec![
                question(
                    "sci1",
                    "What happens to the volume of a gas when temperature increases at constant pressure?",
                    ["Decreases", "Increases", "Remains constant", "Becomes zero"],
                    1,
                    Difficulty::Easy,
                    "According to Charles' Law, volume is directly proportional to temperature at constant pressure",
                ),
                question(
                    "sci2",
                    "A hypothesis in scientific method is:",
                    ["A proven fact", "A testable prediction", "The final conclusion", "An observation"],
                    1,
                    Difficulty::Easy,
                    "A hypothesis is a testable prediction that can be supported or refuted through experimentation",
                ),
                question(
                    "sci3",
                    "If you observe that plants grow taller near a window, what would be the best next step?",
                    ["Conclude that windows help plants grow", "Test if light affects plant growth", "Move all plants near windows", "Ignore the observation"],
                    1,
                    Difficulty::Medium,
                    "The scientific approach is to form a hypothesis and test it systematically",
                ),
                question(
                    "sci4",
                    "What is the pH of a solution with [H+] = 1 × 10⁻⁵ M?",
                    ["5", "9", "10⁻⁵", "-5"],
                    0,
                    Difficulty::Medium,
                    "pH = -log[H+] = -log(1 × 10⁻⁵) = 5",
                ),
                question(
                    "sci5",
                    "Which of the following best describes natural selection?",
                    ["Organisms choose to evolve", "Favorable traits become more common over time", "All organisms evolve at the same rate", "Evolution happens randomly"],
                    1,
                    Difficulty::Medium,
                    "Natural selection favors organisms with advantageous traits, making these traits more common in populations over time",
                ),
            ],
        ),
        area(
            "Creative & Artistic Abilities",
            "Assess your creative thinking and artistic sensibilities",
            "Palette",
            vec![
                question(
                    "art1",
                    "Which color combination creates the most visual contrast?",
                    ["Red and pink", "Blue and green", "Yellow and purple", "Orange and red"],
                    2,
                    Difficulty::Easy,
                    "Yellow and purple are complementary colors, creating the highest contrast",
                ),
                question(
                    "art2",
                    "You need to design a logo for a children's toy company. Which approach would be most effective?",
                    ["Use dark colors and sharp edges", "Use bright colors and rounded shapes", "Use only text without graphics", "Use complex geometric patterns"],
                    1,
                    Difficulty::Easy,
                    "Bright colors and rounded shapes are more appealing and safe-feeling for children",
                ),
                question(
                    "art3",
                    "What is the \"rule of thirds\" in visual composition?",
                    ["Using only three colors", "Dividing the image into nine equal parts", "Making objects one-third the size", "Using three different fonts"],
                    1,
                    Difficulty::Medium,
                    "The rule of thirds divides an image into nine equal parts to create more interesting compositions",
                ),
                question(
                    "art4",
                    "How many different ways can you use a paperclip? (Choose the most creative approach)",
                    ["Only for holding papers together", "5-10 different ways", "20+ different ways including art and tools", "Just 2-3 office uses"],
                    2,
                    Difficulty::Medium,
                    "Creative thinking involves seeing multiple possibilities - paperclips can be jewelry, tools, art materials, etc.",
                ),
                question(
                    "art5",
                    "What makes a story compelling?",
                    ["Complex vocabulary", "Character development and conflict", "Length and detail", "Perfect grammar"],
                    1,
                    Difficulty::Medium,
                    "Compelling stories focus on character growth and meaningful conflicts that engage readers emotionally",
                ),
            ],
        ),
        area(
            "Technical & Mechanical Aptitude",
            "Evaluate your understanding of technical concepts and mechanical reasoning",
            "Settings",
            vec![
                question(
                    "tech1",
                    "If gear A has 20 teeth and gear B has 40 teeth, and gear A rotates 4 times, how many times does gear B rotate?",
                    ["1 time", "2 times", "4 times", "8 times"],
                    1,
                    Difficulty::Easy,
                    "Gear ratio is inversely proportional. 20/40 = 1/2, so gear B rotates 4 × 1/2 = 2 times",
                ),
                question(
                    "tech2",
                    "What is the primary function of a capacitor in an electronic circuit?",
                    ["To resist current flow", "To store electrical energy", "To amplify signals", "To convert AC to DC"],
                    1,
                    Difficulty::Medium,
                    "A capacitor stores electrical energy in an electric field between its plates",
                ),
                question(
                    "tech3",
                    "Which tool would be most appropriate for measuring the internal diameter of a pipe?",
                    ["Ruler", "Caliper", "Protractor", "Level"],
                    1,
                    Difficulty::Easy,
                    "Calipers are designed to measure internal and external dimensions accurately",
                ),
                question(
                    "tech4",
                    "In programming, what is the purpose of a loop?",
                    ["To store data", "To repeat a set of instructions", "To make decisions", "To display output"],
                    1,
                    Difficulty::Easy,
                    "Loops are used to repeat a block of code multiple times until a condition is met",
                ),
                question(
                    "tech5",
                    "If a lever has a fulcrum 2 meters from a 100N load and 8 meters from the effort, what effort is needed?",
                    ["25N", "50N", "200N", "400N"],
                    0,
                    Difficulty::Hard,
                    "Using the lever principle: Load × Load arm = Effort × Effort arm. 100 × 2 = Effort × 8, so Effort = 25N",
                ),
            ],
        ),
        area(
            "Social & Interpersonal Skills",
            "Assess your ability to understand and work with others",
            "Users",
            vec![
                question(
                    "social1",
                    "A team member consistently misses deadlines. What's the best approach?",
                    ["Ignore it and do their work yourself", "Complain to the manager immediately", "Have a private conversation to understand the issue", "Criticize them in front of the team"],
                    2,
                    Difficulty::Easy,
                    "Direct, private communication helps understand root causes and maintains relationships",
                ),
                question(
                    "social2",
                    "During a heated discussion, what's the most effective way to de-escalate tension?",
                    ["Raise your voice to be heard", "Acknowledge different viewpoints and find common ground", "Leave the room immediately", "Insist that you're right"],
                    1,
                    Difficulty::Medium,
                    "Acknowledging different perspectives and finding common ground helps reduce tension and move toward resolution",
                ),
                question(
                    "social3",
                    "You notice a colleague seems stressed and withdrawn. What should you do?",
                    ["Mind your own business", "Tell everyone else about your observation", "Offer support and ask if they need help", "Report them to HR"],
                    2,
                    Difficulty::Easy,
                    "Offering genuine support shows empathy and can help a colleague in need",
                ),
                question(
                    "social4",
                    "What is active listening?",
                    ["Waiting for your turn to speak", "Fully concentrating and responding thoughtfully", "Taking notes during conversation", "Agreeing with everything said"],
                    1,
                    Difficulty::Medium,
                    "Active listening involves full attention, understanding, and thoughtful responses",
                ),
                question(
                    "social5",
                    "How do you handle cultural differences in a diverse workplace?",
                    ["Expect everyone to adapt to your culture", "Avoid interacting with different cultures", "Learn about and respect different perspectives", "Point out cultural differences to others"],
                    2,
                    Difficulty::Medium,
                    "Respecting and learning about different cultures creates an inclusive environment",
                ),
            ],
        ),
        area(
            "Leadership & Management",
            "Test your leadership potential and management understanding",
            "Crown",
            vec![
                question(
                    "lead1",
                    "What is the most important quality of a good leader?",
                    ["Being the smartest person in the room", "Making all decisions quickly", "Inspiring and empowering others", "Having the most experience"],
                    2,
                    Difficulty::Easy,
                    "Great leaders inspire and empower their teams to achieve collective goals",
                ),
                question(
                    "lead2",
                    "Your team is facing a challenging project with tight deadlines. What's your approach?",
                    ["Work overtime yourself to complete everything", "Delegate tasks based on team strengths and provide support", "Ask for deadline extension immediately", "Reduce project scope without consulting anyone"],
                    1,
                    Difficulty::Medium,
                    "Effective delegation based on strengths, combined with support, maximizes team potential",
                ),
                question(
                    "lead3",
                    "How should you handle a conflict between two team members?",
                    ["Let them work it out themselves", "Take sides with the person you like more", "Facilitate a discussion to find resolution", "Separate them permanently"],
                    2,
                    Difficulty::Medium,
                    "Leaders should facilitate resolution by helping parties communicate and find common ground",
                ),
                question(
                    "lead4",
                    "What's the best way to motivate a team?",
                    ["Offer only monetary rewards", "Use fear of consequences", "Understand individual motivations and provide meaningful work", "Set impossible goals to challenge them"],
                    2,
                    Difficulty::Medium,
                    "Understanding what motivates each individual and providing meaningful work creates lasting motivation",
                ),
                question(
                    "lead5",
                    "A team member made a significant mistake. How do you respond?",
                    ["Publicly criticize them as an example", "Fire them immediately", "Address it privately, focus on learning and prevention", "Ignore it and hope it doesn't happen again"],
                    2,
                    Difficulty::Easy,
                    "Private discussion focusing on learning and prevention maintains dignity while addressing the issue",
                ),
            ],
        ),
    ]
}
