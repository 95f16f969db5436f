/// One creative-writing challenge per day, in order.
pub const CHALLENGES: &[&str] = &[
    "Write a poem about freedom.",
    "Draw something that represents your happiness.",
    "List 3 things you learned this week.",
    "Write a letter to your future self.",
    "Create a short story about courage.",
    "Write something you would like to hear when you are sad.",
    "Describe your safe place in as much detail as you can.",
    "Write a sentence that motivates you today.",
    "Make a list of dreams you have.",
    "Draw how you feel right now using only geometric shapes.",
    "Write a song about friendship.",
    "Describe a memory that makes you smile.",
    "Write about what love means to you.",
    "Invent a recipe for happiness.",
    "Write a story that begins with \"Once upon a time there was a shadow...\"",
    "List people who inspire you and why.",
    "Write an acrostic with your name.",
    "Describe your personality as if you were a character in a book.",
    "Write a thank-you letter to someone, even if you never send it.",
    "List 5 things that make you feel good.",
    "Write a movie scene you would like to live.",
    "Write an alternative ending for a film you love.",
    "Imagine a magical place and describe it.",
    "Write a text made only of questions.",
    "Draw a symbol for your inner strength.",
    "Write a story based on a dream you had.",
    "Write a poem around the word \"wind\".",
    "Make a list of things you want to learn.",
    "Describe your life as if it were a TV series.",
    "Write a piece of advice you would like to follow every day.",
    "Write about your biggest dream and how you plan to reach it.",
    "List 5 things you are grateful for today.",
    "Write a story about a hero facing a great challenge.",
    "Write a letter to someone who inspired you.",
    "Describe your ideal place to rest and how it makes you feel.",
    "List 3 things you would like to learn this year.",
    "If you could travel anywhere in the world, where would you go and why?",
    "Write about a moment you felt really proud of yourself.",
    "Write a short poem on a random theme.",
    "Describe a perfect day and what you would do in it.",
    "List 3 things you could improve about yourself.",
    "Write about a film or book that changed your perspective.",
    "Draw something that represents the word 'love'.",
    "Create a mantra or positive affirmation to repeat every day.",
    "Write a thank-you letter to yourself.",
    "List things that make you feel calm and relaxed.",
    "Create a fictional character and write about their most exciting adventure.",
    "Write about a place you want to visit and why it matters to you.",
    "Describe a day in the life of someone you admire.",
    "Write yourself a letter of forgiveness for something in the past.",
    "Make a plan to reach an important goal in your life.",
    "Write about why helping others matters.",
    "List 5 things you can do to boost your self-esteem.",
    "Write about a time you overcame a fear.",
    "Write about a talent you would like to develop.",
    "If you could have one special ability, what would it be and why?",
    "Write about what 'success' means to you.",
    "List 10 things that make you happy.",
    "Write about a trip that left you unforgettable memories.",
    "Describe a time you helped someone and how it made you feel.",
    "Write about how you would like to be remembered.",
    "Write a poem about nature.",
    "List 5 goals for the next 6 months.",
    "Describe your dream home.",
    "Write a letter to yourself 5 years from now.",
    "Imagine a world without technology and describe life there.",
    "Write about a moment you felt truly welcomed.",
    "Plan a perfect day from waking up to going to bed.",
    "List 3 habits you would like to build for a healthier life.",
    "Write about what would make the world a better place.",
    "Write about the importance of being kind to others and to yourself.",
    "Describe what resilience means and how you could practise it.",
    "Write an encouraging letter to a friend or relative.",
    "Write about the last time you felt inspired.",
    "Imagine you are a mentor. What would you tell someone just starting out?",
    "Write about a mistake you made and what it taught you.",
    "If you had one free hour every day, how would you use it?",
    "Describe a habit you want to drop and how you would do it.",
    "List 5 things you can do to look after your mental health.",
    "Write about the role of patience in your growth.",
    "Describe what balance in life means to you.",
    "Write about how mindfulness could fit into your routine.",
    "Write about a hobby you would like to explore further.",
    "Write about why persistence matters when chasing your goals.",
];
