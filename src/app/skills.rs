use leptos::prelude::*;

use super::reveal::Reveal;

struct Skill {
    name: &'static str,
    icon: &'static str,
}

struct SkillCategory {
    title: &'static str,
    skills: &'static [Skill],
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "HTML", icon: "/frontend/html.png" },
            Skill { name: "CSS", icon: "/frontend/css.png" },
            Skill { name: "JavaScript", icon: "/frontend/js.png" },
            Skill { name: "React", icon: "/frontend/react.png" },
            Skill { name: "Tailwind", icon: "/frontend/tailwindCss.png" },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", icon: "/backend/nodejs.png" },
            Skill { name: "Express", icon: "/backend/express.png" },
            Skill { name: "PHP", icon: "/backend/php.svg" },
            Skill { name: "Python", icon: "/backend/python.png" },
            Skill { name: "Java", icon: "/backend/java.svg" },
        ],
    },
    SkillCategory {
        title: "Database & Tools",
        skills: &[
            Skill { name: "MongoDB", icon: "/backend/mongodb.svg" },
            Skill { name: "XAMPP", icon: "/backend/xampp.png" },
            Skill { name: "Git", icon: "/backend/git.png" },
        ],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto w-full">
            <Reveal class="text-center mb-12">
                <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-4">
                    <span class="inline-block mr-3">"📚"</span>
                    <span class="bg-gradient-to-r from-blue-400 to-cyan-300 bg-clip-text text-transparent">
                        "My Learning Journey"
                    </span>
                </h2>
                <p class="text-gray-400 max-w-2xl mx-auto text-lg">
                    "Technologies I've worked with and continue to explore"
                </p>
            </Reveal>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">
                {SKILL_CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <Reveal
                                class="bg-gray-800/50 rounded-2xl p-6 backdrop-blur-sm border border-gray-700 hover:border-blue-400 hover:-translate-y-2 transition-all duration-300"
                                delay_ms={i as u32 * 100}
                            >
                                <h3 class="text-xl md:text-2xl font-semibold mb-6 text-center text-white">
                                    {category.title}
                                </h3>
                                <div class="grid grid-cols-3 gap-3 justify-items-center">
                                    {category.skills.iter().map(skill_tile).collect_view()}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <Reveal class="mt-16 text-center" delay_ms=300>
                <p class="text-gray-400 italic">
                    "\"The only way to learn a new programming language is by writing programs in it.\" - Dennis Ritchie"
                </p>
            </Reveal>
        </div>
    }
}

fn skill_tile(skill: &Skill) -> impl IntoView {
    view! {
        <div class="bg-gray-900/30 backdrop-blur-md p-3 sm:p-4 rounded-xl shadow-md flex flex-col items-center group relative hover:bg-gray-900/50 hover:scale-105 transition-all duration-200">
            <div class="w-10 h-10 sm:w-12 sm:h-12 mb-2 flex items-center justify-center wiggle-on-hover">
                <img
                    src=skill.icon
                    alt=skill.name
                    class="w-full h-full object-contain grayscale-[20%] group-hover:grayscale-0 transition-all duration-300"
                    loading="lazy"
                />
            </div>
            <span class="text-xs sm:text-sm text-center text-gray-300 group-hover:text-white transition-colors">
                {skill.name}
            </span>
        </div>
    }
}
