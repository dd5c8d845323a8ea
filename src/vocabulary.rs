//! Fixed word lists the generator samples from.

pub const FIRST_NAMES: &[&str] = &[
    "João", "Maria", "Pedro", "Ana", "Carlos", "Lucia", "Fernando", "Isabela", "Rafael", "Camila",
    "Lucas", "Julia", "Gabriel", "Beatriz", "Matheus", "Sofia", "Thiago", "Mariana", "Diego",
    "Carolina", "André", "Amanda", "Bruno", "Letícia", "Ricardo", "Bianca", "Felipe", "Natalia",
    "Alexandre", "Vanessa", "Daniel", "Priscila", "Marcelo", "Tatiana", "Roberto", "Renata",
];

pub const LAST_NAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Almeida", "Pereira", "Lima",
    "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Alves", "Lopes", "Soares", "Fernandes",
    "Vieira", "Barbosa", "Rocha", "Dias", "Nascimento", "Andrade", "Moreira", "Nunes", "Mendes",
    "Freitas", "Cardoso", "Correia", "Melo", "Cavalcanti", "Castro", "Araujo", "Cunha",
];

pub const MUSIC_GENRES: &[&str] = &[
    "Rock", "Pop", "Hip Hop", "Jazz", "Classical", "Electronic", "Country", "R&B", "Reggae",
    "Blues", "Folk", "Metal", "Punk", "Indie", "Alternative", "Funk", "Samba", "Bossa Nova", "MPB",
    "Forró", "Axé", "Pagode", "Sertanejo",
];

pub const ARTIST_NAMES: &[&str] = &[
    "The Beatles",
    "Queen",
    "Pink Floyd",
    "Led Zeppelin",
    "Rolling Stones",
    "Bob Dylan",
    "David Bowie",
    "Elvis Presley",
    "Michael Jackson",
    "Madonna",
    "Prince",
    "Stevie Wonder",
    "Aretha Franklin",
    "James Brown",
    "Ray Charles",
    "John Lennon",
    "Paul McCartney",
    "George Harrison",
    "Ringo Starr",
    "Freddie Mercury",
    "Roger Waters",
    "Jimmy Page",
    "Mick Jagger",
    "Keith Richards",
    "Eric Clapton",
    "Jimi Hendrix",
    "Janis Joplin",
    "Joni Mitchell",
    "Bob Marley",
    "Tupac Shakur",
    "Notorious B.I.G.",
    "Eminem",
    "Jay-Z",
    "Kanye West",
    "Drake",
    "Taylor Swift",
    "Adele",
    "Ed Sheeran",
    "Bruno Mars",
    "Lady Gaga",
    "Beyoncé",
    "Rihanna",
    "Justin Timberlake",
    "Coldplay",
    "Radiohead",
    "Nirvana",
    "Pearl Jam",
    "Soundgarden",
    "Alice in Chains",
    "Stone Temple Pilots",
    "Red Hot Chili Peppers",
];

// ISO 3166-1 alpha-2, except "UK"
pub const COUNTRIES: &[&str] = &[
    "BR", "US", "UK", "CA", "AU", "DE", "FR", "IT", "ES", "JP", "KR", "MX", "AR", "CL", "CO",
];

pub const COMMUNITY_NAMES: &[&str] = &[
    "Rock Lovers",
    "Jazz Enthusiasts",
    "Classical Music Society",
    "Hip Hop Nation",
    "Electronic Music Fans",
    "Country Music Community",
    "Blues Brothers",
    "Metalheads United",
    "Pop Music Fans",
    "Indie Music Collective",
    "Funk & Soul",
    "Samba & Bossa Nova",
    "MPB Brasil",
    "Forró Dance Club",
    "Axé Music Fans",
    "Pagode & Samba",
    "Sertanejo Country",
    "Reggae Vibes",
    "Punk Rockers",
    "Alternative Music",
    "Folk Music Circle",
    "R&B Soul",
    "Gospel Music",
    "World Music",
    "Instrumental Music",
    "Acoustic Sessions",
    "Cover Bands",
    "Songwriters Guild",
    "Music Producers",
    "DJ Community",
    "Music Critics",
    "Vinyl Collectors",
    "Concert Goers",
    "Music Students",
];

pub const POST_TEXTS: &[&str] = &[
    "Just discovered this amazing new artist! 🎵",
    "Can't stop listening to this song! 🔥",
    "What's everyone's favorite album right now?",
    "Going to a concert tonight! So excited! 🎤",
    "This band changed my life! 💫",
    "New music Friday! What should I listen to?",
    "Remembering this classic song today 🎶",
    "Music is the universal language of the soul",
    "Just finished recording my first song! 🎸",
    "Who else loves this genre?",
    "This song brings back so many memories",
    "Music therapy is real! 🧘",
    "What's your go-to song when you're feeling down?",
    "This artist deserves more recognition!",
    "Music festival season is here! 🎪",
    "Learning to play guitar! Any tips? 🎸",
    "This album is a masterpiece! 👑",
    "Music connects us all 🌍",
    "What's the best concert you've ever been to?",
    "This song gets me through tough times 💪",
    "Music is my escape from reality",
    "Who else is obsessed with this band?",
    "This song is stuck in my head! 🎵",
    "Music has the power to heal ❤️",
    "What's your favorite music decade?",
    "This artist is underrated!",
    "Music brings people together 🤝",
    "What's your current playlist?",
    "This song makes me want to dance! 💃",
    "Music is life! 🎼",
    "Who else loves live music?",
    "This band is incredible live!",
    "Music is the soundtrack of our lives 🎬",
];

pub const SONG_TITLES: &[&str] = &[
    "Midnight Dreams",
    "Electric Love",
    "Ocean Waves",
    "City Lights",
    "Mountain High",
    "Desert Wind",
    "Starry Night",
    "Golden Hour",
    "Silver Moon",
    "Crystal Clear",
    "Deep Blue",
    "Fire and Ice",
    "Thunder Road",
    "Silent Echo",
    "Wild Heart",
    "Gentle Soul",
    "Brave New World",
    "Ancient Times",
    "Future Days",
    "Present Moment",
    "Lost in Time",
    "Found in Love",
    "Breaking Free",
    "Coming Home",
    "Rising Sun",
    "Setting Moon",
    "Morning Light",
    "Evening Star",
];

pub const ALBUMS: &[&str] = &[
    "First Album",
    "Second Chance",
    "New Beginnings",
    "The Journey",
    "Life Stories",
    "Dreams and Reality",
    "Sound of Silence",
    "Voice of the People",
    "Heart and Soul",
    "Mind and Body",
    "Spirit of Music",
    "Rhythm of Life",
    "Melody of Love",
    "Harmony of Nature",
    "Symphony of Emotions",
    "Concerto of Dreams",
];

pub const PLAYLIST_NAMES: &[&str] = &[
    "My Favorites",
    "Workout Mix",
    "Chill Vibes",
    "Party Time",
    "Study Music",
    "Road Trip",
    "Late Night",
    "Morning Coffee",
    "Rainy Day",
    "Sunny Afternoon",
    "Weekend Vibes",
    "Holiday Spirit",
    "Summer Hits",
    "Winter Warmth",
    "Spring Awakening",
    "Autumn Colors",
    "Rock Classics",
    "Jazz Lounge",
    "Hip Hop Beats",
    "Electronic Dreams",
    "Country Roads",
    "Blues Night",
    "Folk Tales",
    "Metal Mayhem",
    "Pop Hits",
    "Indie Gems",
    "Alternative Rock",
    "R&B Soul",
    "Reggae Vibes",
    "Classical Masterpieces",
    "World Music",
    "Acoustic Sessions",
];
