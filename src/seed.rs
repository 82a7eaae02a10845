//! Sample catalog inserted into an empty `movies` collection.

use crate::models::NewMovie;

fn cast(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn sample_movies() -> Vec<NewMovie> {
    vec![
        NewMovie {
            title: "Avengers: Endgame".into(),
            description: "Los Vengadores se reúnen una vez más para deshacer las acciones de Thanos y restaurar el equilibrio del universo.".into(),
            poster_image: "https://example.com/avengers-endgame.jpg".into(),
            genre: "Acción".into(),
            duration: 181,
            rating: "PG-13".into(),
            release_date: "2019-04-26".into(),
            director: "Anthony Russo, Joe Russo".into(),
            cast: cast(&["Robert Downey Jr.", "Chris Evans", "Mark Ruffalo", "Chris Hemsworth"]),
        },
        NewMovie {
            title: "The Batman".into(),
            description: "En su segundo año luchando contra el crimen, Batman desentraña la corrupción en Gotham City.".into(),
            poster_image: "https://example.com/the-batman.jpg".into(),
            genre: "Acción".into(),
            duration: 176,
            rating: "PG-13".into(),
            release_date: "2022-03-04".into(),
            director: "Matt Reeves".into(),
            cast: cast(&["Robert Pattinson", "Zoë Kravitz", "Paul Dano", "Jeffrey Wright"]),
        },
        NewMovie {
            title: "Spider-Man: No Way Home".into(),
            description: "Peter Parker busca la ayuda del Doctor Strange cuando su identidad secreta es revelada.".into(),
            poster_image: "https://example.com/spiderman-no-way-home.jpg".into(),
            genre: "Acción".into(),
            duration: 148,
            rating: "PG-13".into(),
            release_date: "2021-12-17".into(),
            director: "Jon Watts".into(),
            cast: cast(&["Tom Holland", "Zendaya", "Benedict Cumberbatch", "Jacob Batalon"]),
        },
    ]
}
