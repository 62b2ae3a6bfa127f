//! Fixed sample data loaded at start-up and on reset.

use chrono::Duration;

use crate::models::{
    self, AdminChat, Animal, Favorite, Match, MatchRequest, MatchStatus, User, UserStats,
    DEFAULT_STATUS,
};

use super::Dataset;

fn photo_url(public_url: &str, file: &str) -> String {
    format!("{}/public/uploads/{}", public_url, file)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build a fresh copy of the seed dataset. Photo links point at `public_url`.
pub fn seed_dataset(public_url: &str) -> Dataset {
    let now = models::now();

    let users = vec![
        User {
            id: "user1".into(),
            name: "Ana Carolina".into(),
            email: "ana@email.com".into(),
            phone: "11987654321".into(),
            location: "São Paulo, SP".into(),
            bio: "Amante de animais procurando um novo amigo de quatro patas.".into(),
            stats: UserStats {
                matches: 1,
                pets_viewed: 25,
                favorites: 3,
                adopted: 0,
            },
            matched_animals: vec![1],
        },
        User {
            id: "user2".into(),
            name: "Marcos Paulo".into(),
            email: "marcos@email.com".into(),
            phone: "21912345678".into(),
            location: "Rio de Janeiro, RJ".into(),
            bio: "Tenho um quintal grande e muito amor para dar.".into(),
            stats: UserStats {
                matches: 1,
                pets_viewed: 40,
                favorites: 5,
                adopted: 1,
            },
            matched_animals: vec![2],
        },
    ];

    let animals = vec![
        Animal {
            id: 1,
            name: "Rex".into(),
            species: "Cachorro".into(),
            breed: "Vira-lata".into(),
            age: 2,
            age_unit: "anos".into(),
            size: "Médio".into(),
            sex: "Macho".into(),
            location: "São Paulo, SP".into(),
            description: "Rex é um companheiro leal e brincalhão. Adora correr atrás de bolinhas e receber carinho na barriga.".into(),
            vaccinated: true,
            neutered: true,
            dewormed: true,
            temperament: strings(&["Brincalhão", "Leal", "Ativo"]),
            needs: strings(&["Passeios diários", "Espaço para correr"]),
            photos: vec![photo_url(public_url, "rex.jpg")],
            status: DEFAULT_STATUS.into(),
            matches: 12,
            views: 150,
        },
        Animal {
            id: 2,
            name: "Luna".into(),
            species: "Gato".into(),
            breed: "Siamês".into(),
            age: 1,
            age_unit: "ano".into(),
            size: "Pequeno".into(),
            sex: "Fêmea".into(),
            location: "Rio de Janeiro, RJ".into(),
            description: "Luna é uma gatinha calma e carinhosa. Gosta de tirar longas sonecas no sol e de um bom colo.".into(),
            vaccinated: true,
            neutered: true,
            dewormed: true,
            temperament: strings(&["Calma", "Carinhosa", "Independente"]),
            needs: strings(&["Caixa de areia limpa", "Arranhadores"]),
            photos: vec![photo_url(public_url, "luna.jpg")],
            status: DEFAULT_STATUS.into(),
            matches: 8,
            views: 95,
        },
        Animal {
            id: 3,
            name: "Pompom".into(),
            species: "Coelho".into(),
            breed: "Angorá".into(),
            age: 6,
            age_unit: "meses".into(),
            size: "Pequeno".into(),
            sex: "Macho".into(),
            location: "Curitiba, PR".into(),
            description: "Pompom é um coelhinho curioso e fofo. Adora feno e vegetais frescos.".into(),
            vaccinated: false,
            neutered: true,
            dewormed: false,
            temperament: strings(&["Curioso", "Dócil"]),
            needs: strings(&["Gaiola espaçosa", "Feno à vontade"]),
            photos: vec![photo_url(public_url, "pompom.jpg")],
            status: DEFAULT_STATUS.into(),
            matches: 5,
            views: 72,
        },
    ];

    let matches = vec![
        Match {
            id: 1,
            pet_id: 1,
            user_id: "user1".into(),
            matched_at: now,
            status: MatchStatus::Pending,
        },
        Match {
            id: 2,
            pet_id: 2,
            user_id: "user2".into(),
            matched_at: now,
            status: MatchStatus::Approved,
        },
    ];

    let favorites = vec![
        Favorite {
            id: 1,
            pet_id: 1,
            user_id: "user2".into(),
            added_at: now,
        },
        Favorite {
            id: 2,
            pet_id: 3,
            user_id: "user1".into(),
            added_at: now,
        },
    ];

    let match_requests = vec![
        MatchRequest {
            id: 1,
            user_name: "Ana Carolina".into(),
            user_image: "https://i.pravatar.cc/150?u=user1".into(),
            pet_name: "Rex".into(),
            pet_image: photo_url(public_url, "rex.jpg"),
            requested_at: now - Duration::hours(2),
            status: MatchStatus::Pending.as_str().into(),
        },
        MatchRequest {
            id: 2,
            user_name: "Marcos Paulo".into(),
            user_image: "https://i.pravatar.cc/150?u=user2".into(),
            pet_name: "Luna".into(),
            pet_image: photo_url(public_url, "luna.jpg"),
            requested_at: now - Duration::days(1),
            status: MatchStatus::Approved.as_str().into(),
        },
    ];

    let admin_chats = vec![
        AdminChat {
            id: 1,
            user_name: "Ana Carolina".into(),
            user_image: "https://i.pravatar.cc/150?u=user1".into(),
            pet_name: "Rex".into(),
            last_message: "Olá! O Rex ainda está disponível?".into(),
            timestamp: now - Duration::minutes(15),
            unread_count: 2,
        },
        AdminChat {
            id: 2,
            user_name: "Marcos Paulo".into(),
            user_image: "https://i.pravatar.cc/150?u=user2".into(),
            pet_name: "Luna".into(),
            last_message: "Podemos marcar uma visita no sábado?".into(),
            timestamp: now - Duration::hours(3),
            unread_count: 0,
        },
    ];

    let mut dataset = Dataset {
        animals,
        users,
        matches,
        favorites,
        match_requests,
        admin_chats,
        ..Default::default()
    };
    dataset.sync_sequences();
    dataset
}
