pub const PHRASES: &[&str] = &[
    "Believe in yourself and the rest will follow.",
    "Every day is a new chance to shine.",
    "Turn your dreams into plans and your plans into actions.",
    "You are capable of amazing things.",
    "Today is a good day to start something new.",
    "Don't stop until you're proud.",
    "Be the energy you want to attract.",
    "Fight for what makes you happy.",
    "Success starts with the courage to try.",
    "Stay focused and keep going.",
    "Every challenge hides a new victory.",
    "Your persistence shapes your greatness.",
    "Today's effort builds tomorrow's achievements.",
    "You are stronger than you think.",
    "Trust your limitless potential.",
    "Happiness is a daily choice.",
    "Keep going: the best is yet to come.",
    "Challenge your limits and grow.",
    "Your attitude shapes your future.",
    "Every small step brings you closer to your dream.",
    "Be the difference you want to see.",
    "Trust the process and move forward.",
    "You change the world around you.",
    "Your effort is your best tool.",
    "Get up, dust yourself off and carry on.",
    "Make today the best day of your life.",
    "Enjoy the small wins.",
    "Optimism is the first step towards success.",
    "A smile can light up the universe.",
    "Celebrate every achievement, however small.",
    "Nothing is impossible for those who believe.",
    "The future belongs to those who prepare today.",
    "Persistence and dedication open every door.",
    "Passion transforms everything around you.",
    "The journey matters more than the destination.",
    "Your courage opens doors to new opportunities.",
    "Face challenges with confidence.",
    "The best is still ahead.",
    "Each day is a fresh chance to be happy.",
    "Don't wait for the opportunity, create it.",
    "Determination is your greatest ally.",
    "Make your path a masterpiece.",
    "Your dreams have no limits.",
    "Success comes to those who dare to try.",
    "Keep calm and carry on.",
    "You are the inspiration the world needs.",
    "Turn your passion into action.",
    "Your potential is endless.",
    "Find the beauty in every moment.",
    "Every new day is a chance to change your life.",
];
