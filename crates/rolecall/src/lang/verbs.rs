//! Embedded list of common English base-form verbs.
//!
//! Sorted for binary search. Third-person-singular forms are deliberately
//! absent so a lookup doubles as a base-form check.

pub(super) const BASE_FORMS: &[&str] = &[
    "accept",
    "access",
    "accompany",
    "accuse",
    "achieve",
    "acknowledge",
    "acquire",
    "act",
    "adapt",
    "add",
    "address",
    "adjust",
    "admit",
    "adopt",
    "advise",
    "affect",
    "afford",
    "agree",
    "aim",
    "allow",
    "analyze",
    "announce",
    "annoy",
    "answer",
    "anticipate",
    "apologize",
    "appeal",
    "appear",
    "apply",
    "appoint",
    "appreciate",
    "approach",
    "approve",
    "argue",
    "arise",
    "arrange",
    "arrest",
    "arrive",
    "ask",
    "assess",
    "assign",
    "assist",
    "assume",
    "assure",
    "attach",
    "attack",
    "attempt",
    "attend",
    "attract",
    "avoid",
    "awake",
    "back",
    "bake",
    "balance",
    "ban",
    "bear",
    "beat",
    "become",
    "beg",
    "begin",
    "behave",
    "believe",
    "belong",
    "bend",
    "benefit",
    "bet",
    "betray",
    "bite",
    "blame",
    "block",
    "blow",
    "boil",
    "borrow",
    "bother",
    "bow",
    "break",
    "breathe",
    "bring",
    "broadcast",
    "build",
    "burn",
    "burst",
    "bury",
    "buy",
    "calculate",
    "call",
    "calm",
    "care",
    "carry",
    "catch",
    "cause",
    "cease",
    "celebrate",
    "challenge",
    "change",
    "charge",
    "chase",
    "chat",
    "check",
    "cheer",
    "choose",
    "claim",
    "clean",
    "clear",
    "climb",
    "close",
    "collapse",
    "collect",
    "combine",
    "come",
    "command",
    "comment",
    "commit",
    "communicate",
    "compare",
    "compel",
    "compete",
    "complain",
    "complete",
    "comply",
    "compose",
    "conceal",
    "concentrate",
    "concern",
    "conclude",
    "condemn",
    "conduct",
    "confess",
    "confirm",
    "confront",
    "confuse",
    "connect",
    "consider",
    "consist",
    "constitute",
    "construct",
    "consult",
    "consume",
    "contact",
    "contain",
    "continue",
    "contribute",
    "control",
    "convince",
    "cook",
    "cooperate",
    "cope",
    "copy",
    "correct",
    "cost",
    "count",
    "cover",
    "crawl",
    "create",
    "criticize",
    "cross",
    "cry",
    "damage",
    "dance",
    "dare",
    "deal",
    "debate",
    "decide",
    "declare",
    "decline",
    "decrease",
    "defend",
    "define",
    "delay",
    "deliver",
    "demand",
    "demonstrate",
    "deny",
    "depend",
    "describe",
    "deserve",
    "design",
    "desire",
    "destroy",
    "detect",
    "determine",
    "develop",
    "devote",
    "die",
    "dig",
    "disagree",
    "disappear",
    "discover",
    "discuss",
    "dismiss",
    "disobey",
    "display",
    "distribute",
    "disturb",
    "divide",
    "do",
    "doubt",
    "drag",
    "draw",
    "dream",
    "dress",
    "drink",
    "drive",
    "drop",
    "dry",
    "earn",
    "eat",
    "echo",
    "edit",
    "educate",
    "elect",
    "embarrass",
    "emerge",
    "emphasize",
    "employ",
    "enable",
    "encounter",
    "encourage",
    "end",
    "endure",
    "enforce",
    "engage",
    "enjoy",
    "ensure",
    "enter",
    "escape",
    "establish",
    "estimate",
    "evaluate",
    "examine",
    "exceed",
    "exchange",
    "exclude",
    "excuse",
    "execute",
    "exercise",
    "exist",
    "expand",
    "expect",
    "experience",
    "explain",
    "explore",
    "expose",
    "express",
    "extend",
    "face",
    "fail",
    "fall",
    "favor",
    "fear",
    "feed",
    "feel",
    "fight",
    "fill",
    "find",
    "finish",
    "fit",
    "fix",
    "flee",
    "fly",
    "focus",
    "fold",
    "follow",
    "forbid",
    "force",
    "forget",
    "forgive",
    "form",
    "free",
    "freeze",
    "frighten",
    "fulfill",
    "gain",
    "gather",
    "generate",
    "get",
    "give",
    "go",
    "govern",
    "grab",
    "grant",
    "greet",
    "grow",
    "guarantee",
    "guard",
    "guess",
    "guide",
    "handle",
    "hang",
    "happen",
    "harass",
    "harm",
    "hate",
    "have",
    "heal",
    "hear",
    "help",
    "hesitate",
    "hide",
    "hit",
    "hold",
    "hope",
    "humiliate",
    "hurry",
    "hurt",
    "identify",
    "ignore",
    "illustrate",
    "imagine",
    "imply",
    "impose",
    "impress",
    "improve",
    "include",
    "increase",
    "indicate",
    "influence",
    "inform",
    "insist",
    "inspect",
    "inspire",
    "install",
    "instruct",
    "insult",
    "intend",
    "interact",
    "interfere",
    "interrupt",
    "intervene",
    "interview",
    "intimidate",
    "introduce",
    "invent",
    "investigate",
    "invite",
    "involve",
    "isolate",
    "issue",
    "join",
    "judge",
    "jump",
    "justify",
    "keep",
    "kick",
    "kill",
    "kiss",
    "knock",
    "know",
    "lack",
    "last",
    "laugh",
    "lay",
    "lead",
    "lean",
    "learn",
    "leave",
    "lend",
    "let",
    "lie",
    "lift",
    "limit",
    "listen",
    "live",
    "lock",
    "look",
    "lose",
    "love",
    "maintain",
    "make",
    "manage",
    "manipulate",
    "mark",
    "matter",
    "mean",
    "measure",
    "meet",
    "mention",
    "mind",
    "miss",
    "mistreat",
    "mix",
    "mock",
    "monitor",
    "motivate",
    "move",
    "need",
    "neglect",
    "negotiate",
    "notice",
    "notify",
    "obey",
    "object",
    "observe",
    "obtain",
    "occupy",
    "occur",
    "offend",
    "offer",
    "open",
    "operate",
    "oppose",
    "order",
    "organize",
    "overcome",
    "oversee",
    "owe",
    "own",
    "participate",
    "pass",
    "pay",
    "perform",
    "permit",
    "persuade",
    "pick",
    "place",
    "plan",
    "play",
    "plead",
    "please",
    "point",
    "possess",
    "pour",
    "practice",
    "praise",
    "pray",
    "predict",
    "prefer",
    "prepare",
    "present",
    "preserve",
    "press",
    "pretend",
    "prevent",
    "print",
    "proceed",
    "process",
    "produce",
    "promise",
    "promote",
    "propose",
    "protect",
    "protest",
    "prove",
    "provide",
    "provoke",
    "publish",
    "pull",
    "punish",
    "pursue",
    "push",
    "put",
    "question",
    "quit",
    "raise",
    "reach",
    "react",
    "read",
    "realize",
    "reassure",
    "rebel",
    "recall",
    "receive",
    "recognize",
    "recommend",
    "record",
    "recover",
    "reduce",
    "refer",
    "reflect",
    "refuse",
    "regard",
    "regret",
    "reject",
    "relate",
    "relax",
    "release",
    "rely",
    "remain",
    "remember",
    "remind",
    "remove",
    "repeat",
    "replace",
    "reply",
    "report",
    "represent",
    "request",
    "require",
    "rescue",
    "resent",
    "resist",
    "resolve",
    "respect",
    "respond",
    "rest",
    "restrict",
    "result",
    "retain",
    "retreat",
    "return",
    "reveal",
    "review",
    "revolt",
    "reward",
    "ride",
    "ring",
    "rise",
    "risk",
    "rule",
    "run",
    "rush",
    "satisfy",
    "save",
    "say",
    "scare",
    "scream",
    "search",
    "seat",
    "secure",
    "see",
    "seek",
    "seem",
    "seize",
    "select",
    "sell",
    "send",
    "separate",
    "serve",
    "set",
    "settle",
    "shake",
    "share",
    "shift",
    "shout",
    "show",
    "shut",
    "sing",
    "sit",
    "sleep",
    "smile",
    "solve",
    "speak",
    "spend",
    "split",
    "spread",
    "stand",
    "stare",
    "start",
    "starve",
    "state",
    "stay",
    "steal",
    "stick",
    "stop",
    "strengthen",
    "stress",
    "stretch",
    "strike",
    "struggle",
    "study",
    "submit",
    "succeed",
    "suffer",
    "suggest",
    "supervise",
    "supply",
    "support",
    "suppose",
    "suppress",
    "surrender",
    "surround",
    "survive",
    "suspect",
    "swear",
    "swim",
    "take",
    "talk",
    "teach",
    "tell",
    "tend",
    "test",
    "thank",
    "think",
    "threaten",
    "throw",
    "tie",
    "tolerate",
    "torment",
    "torture",
    "toss",
    "touch",
    "train",
    "transfer",
    "transform",
    "treat",
    "tremble",
    "trust",
    "try",
    "turn",
    "undergo",
    "undermine",
    "understand",
    "unite",
    "urge",
    "use",
    "value",
    "vanish",
    "veto",
    "violate",
    "visit",
    "vote",
    "wait",
    "wake",
    "walk",
    "want",
    "warn",
    "wash",
    "watch",
    "wear",
    "weep",
    "whisper",
    "win",
    "wish",
    "withdraw",
    "wonder",
    "work",
    "worry",
    "write",
    "yell",
    "yield",
];
