//! Integration-Tests fuer QuestRepository (In-Memory SQLite)

use questgate_core::QuestId;
use questgate_db::{models::QuestDaten, DbError, QuestRepository, SqliteDb};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

fn schwert() -> QuestDaten<'static> {
    QuestDaten {
        title: "Find sword",
        description: "in the cave",
        reward: 10,
    }
}

#[tokio::test]
async fn quest_erstellen_und_laden() {
    let db = db().await;

    let quest = QuestRepository::create(&db, schwert()).await.unwrap();
    assert_eq!(quest.id, QuestId(1));
    assert_eq!(quest.created_at, quest.updated_at);

    let geladen = QuestRepository::get_by_id(&db, quest.id)
        .await
        .unwrap()
        .expect("Quest sollte gefunden werden");
    assert_eq!(geladen, quest);
}

#[tokio::test]
async fn quests_auflisten_nach_id() {
    let db = db().await;
    assert!(QuestRepository::list(&db).await.unwrap().is_empty());

    QuestRepository::create(&db, schwert()).await.unwrap();
    QuestRepository::create(
        &db,
        QuestDaten {
            title: "Slay dragon",
            description: "on the mountain",
            reward: 500,
        },
    )
    .await
    .unwrap();

    let alle = QuestRepository::list(&db).await.unwrap();
    assert_eq!(alle.len(), 2);
    assert_eq!(alle[0].title, "Find sword");
    assert_eq!(alle[1].reward, 500);
}

#[tokio::test]
async fn quest_ueberschreiben() {
    let db = db().await;
    let quest = QuestRepository::create(&db, schwert()).await.unwrap();

    let neu = QuestRepository::update(
        &db,
        quest.id,
        QuestDaten {
            title: "Find shield",
            description: "behind the waterfall",
            reward: 25,
        },
    )
    .await
    .unwrap();

    assert_eq!(neu.id, quest.id);
    assert_eq!(neu.title, "Find shield");
    assert_eq!(neu.description, "behind the waterfall");
    assert_eq!(neu.reward, 25);
    assert_eq!(neu.created_at, quest.created_at);
    assert!(neu.updated_at >= quest.updated_at);
}

#[tokio::test]
async fn unbekannte_quest_ueberschreiben_schlaegt_fehl() {
    let db = db().await;
    let ergebnis = QuestRepository::update(&db, QuestId(99), schwert()).await;
    assert!(matches!(ergebnis, Err(DbError::NichtGefunden(_))));
}

#[tokio::test]
async fn quest_loeschen() {
    let db = db().await;
    let quest = QuestRepository::create(&db, schwert()).await.unwrap();

    assert!(QuestRepository::delete(&db, quest.id).await.unwrap());
    assert!(!QuestRepository::delete(&db, quest.id).await.unwrap());
    assert!(QuestRepository::get_by_id(&db, quest.id).await.unwrap().is_none());
}
